//! Per-vertex records and the CPU reference of the vertex stage.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec4};

use crate::color::PackedColor;
use crate::projection::DEPTH_CONVENTION;

/// Per-vertex input for the UI shader.
///
/// Field order matches the vertex buffer bit-for-bit: position at offset 0,
/// texture coordinate at 8, packed color at 16 (20-byte stride). Attribute
/// locations follow [`layout`](Self::layout).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct UiVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: PackedColor,
}

impl UiVertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x2, // uv
        2 => Uint32     // packed color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<UiVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Vertex-stage output for one vertex.
///
/// `uv` is forwarded unchanged at location 0; `color` is the unpacked
/// straight-alpha RGBA at location 1; `clip_position` feeds the rasterizer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformedVertex {
    pub clip_position: Vec4,
    pub uv: Vec2,
    pub color: [f32; 4],
}

/// CPU reference of the vertex shader (`vs_main` in `shaders/ui.wgsl`).
///
/// Pure and total over its inputs: every position/matrix/color produces a
/// defined output, with no branching and no shared state between calls. The
/// host projection is applied first, then [`DEPTH_CONVENTION`].
pub fn transform_vertex(vertex: UiVertex, proj: Mat4) -> TransformedVertex {
    let pos = Vec4::new(vertex.position[0], vertex.position[1], 0.0, 1.0);

    TransformedVertex {
        clip_position: DEPTH_CONVENTION * (proj * pos),
        uv: Vec2::from(vertex.uv),
        color: vertex.color.unpack(),
    }
}
