//! Nabu vertex stage.
//!
//! This crate owns the vertex stage of a wgpu immediate-mode GUI renderer:
//! the WGSL shader source, its binding contract, and a CPU reference of the
//! same transform.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader projects to clip space with a host-supplied matrix,
//!   then applies the wgpu depth-convention adjustment (+Y flip, depth
//!   remapped from [-1, 1] to [0, 1]).
//!
//! Pipeline assembly, textures, the fragment stage and draw submission stay
//! with the host renderer; this crate only defines what crosses the vertex
//! stage boundary.

pub mod color;
pub mod logging;
pub mod projection;
pub mod shader;
pub mod vertex;
pub mod viewport;
