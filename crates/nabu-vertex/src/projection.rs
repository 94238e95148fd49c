//! Projection matrices for UI geometry.
//!
//! Two matrices make up the position path of the vertex stage:
//! - a host-supplied projection (usually [`ortho_projection`]) uploaded to
//!   the `Locals` uniform each frame;
//! - the compile-time [`DEPTH_CONVENTION`] adjustment baked into the shader.
//!
//! The shader applies the projection first, then the convention matrix.

use std::sync::Once;

use glam::{Mat4, Vec4};

use crate::viewport::Viewport;

/// Depth-convention adjustment applied after the host projection matrix.
///
/// Flips +Y and remaps clip-space depth from [-1, 1] to [0, 1]:
/// `x' = x`, `y' = -y`, `z' = 0.5 * z + 0.5 * w`, `w' = w`.
///
/// Must stay in sync with the `DEPTH_CONVENTION` constant in
/// `shaders/ui.wgsl`.
pub const DEPTH_CONVENTION: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, 0.0, 0.0, 0.0),
    Vec4::new(0.0, -1.0, 0.0, 0.0),
    Vec4::new(0.0, 0.0, 0.5, 0.0),
    Vec4::new(0.0, 0.0, 0.5, 1.0),
);

static DEGENERATE_WARNED: Once = Once::new();

/// Orthographic projection for UI geometry in logical pixels.
///
/// Maps (0, 0)..(width, height) with top-left origin to NDC. Degenerate
/// viewports are clamped to 1x1 (one-time debug message) so the matrix stays
/// finite; hosts are expected to skip presenting zero-sized surfaces anyway.
pub fn ortho_projection(viewport: Viewport) -> Mat4 {
    if !viewport.is_valid() {
        DEGENERATE_WARNED
            .call_once(|| log::debug!("degenerate viewport {viewport:?}; clamping to 1x1"));
    }
    let v = viewport.clamped();

    Mat4::from_cols(
        Vec4::new(2.0 / v.width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, -2.0 / v.height, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -1.0, 0.0),
        Vec4::new(-1.0, 1.0, 0.0, 1.0),
    )
}
