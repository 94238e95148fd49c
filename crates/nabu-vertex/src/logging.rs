//! Logger bootstrap for host applications.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` once.
///
/// `filter` follows the `env_logger` syntax (e.g. "info",
/// "nabu_vertex=debug,wgpu=warn"). When `None`, `RUST_LOG` is honored if
/// set, otherwise output defaults to warn level — the appropriate noise
/// floor for a library crate.
///
/// Idempotent; later calls are ignored. Intended usage is early in the
/// host's `main`.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(f) = filter {
            builder.parse_filters(f);
        } else if let Ok(f) = std::env::var("RUST_LOG") {
            builder.parse_filters(&f);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();
        log::debug!("logging initialized");
    });
}
