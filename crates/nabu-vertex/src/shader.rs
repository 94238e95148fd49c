//! WGSL shader surface and its uniform binding contract.
//!
//! Everything a host pipeline needs to bind the vertex stage: the shader
//! module, the `Locals` uniform block at group 0 / binding 0, and the blend
//! state matching the straight-alpha colors the stage emits.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// WGSL source for the UI vertex stage (entry point `vs_main`).
pub const WGSL_SOURCE: &str = include_str!("shaders/ui.wgsl");

/// Uniform block at group 0, binding 0.
///
/// Shared read-only by every invocation in a draw call; the host must not
/// rewrite it mid-draw.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct Locals {
    /// Column-major projection matrix.
    pub proj: [[f32; 4]; 4],
}

impl Locals {
    #[inline]
    pub fn new(proj: Mat4) -> Self {
        Self {
            proj: proj.to_cols_array_2d(),
        }
    }
}

/// Creates the shader module from the embedded WGSL source.
pub fn shader_module(device: &wgpu::Device) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("nabu ui shader"),
        source: wgpu::ShaderSource::Wgsl(WGSL_SOURCE.into()),
    })
}

/// Bind group layout for [`Locals`]: a vertex-stage uniform at binding 0.
pub fn locals_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("nabu locals bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: Some(locals_min_binding_size()),
            },
            count: None,
        }],
    })
}

/// Creates the uniform buffer backing [`Locals`].
///
/// Write it with [`write_locals`] before the first draw that samples it.
pub fn create_locals_buffer(device: &wgpu::Device) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("nabu locals ubo"),
        size: std::mem::size_of::<Locals>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Binds a [`Locals`] buffer to group 0.
pub fn locals_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("nabu locals bind group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    })
}

/// Uploads a projection matrix into a [`Locals`] buffer.
pub fn write_locals(queue: &wgpu::Queue, buffer: &wgpu::Buffer, proj: Mat4) {
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(&Locals::new(proj)));
}

/// Blend state for the straight-alpha colors this stage emits.
pub fn straight_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::OneMinusDstAlpha,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// Returns the `wgpu` minimum binding size for the `Locals` uniform buffer.
///
/// `Locals` holds a 4x4 `f32` matrix (64 bytes) so its size is always
/// non-zero. Centralising this avoids `.unwrap()` at the pipeline-creation
/// site.
fn locals_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<Locals>() as u64)
        .expect("Locals has non-zero size by construction")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── uniform layout ────────────────────────────────────────────────────

    #[test]
    fn locals_is_a_bare_mat4() {
        assert_eq!(std::mem::size_of::<Locals>(), 64);
        assert_eq!(std::mem::align_of::<Locals>(), 4);
        assert_eq!(locals_min_binding_size().get(), 64);
    }

    #[test]
    fn locals_stores_columns() {
        let m = Mat4::from_cols(
            glam::Vec4::new(1.0, 2.0, 3.0, 4.0),
            glam::Vec4::new(5.0, 6.0, 7.0, 8.0),
            glam::Vec4::new(9.0, 10.0, 11.0, 12.0),
            glam::Vec4::new(13.0, 14.0, 15.0, 16.0),
        );
        let locals = Locals::new(m);
        assert_eq!(locals.proj[0], [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(locals.proj[3], [13.0, 14.0, 15.0, 16.0]);
    }

    // ── shader source ─────────────────────────────────────────────────────

    #[test]
    fn wgsl_parses_and_validates() {
        let module = naga::front::wgsl::parse_str(WGSL_SOURCE)
            .expect("ui.wgsl should parse");

        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        )
        .validate(&module)
        .expect("ui.wgsl should validate");
    }

    #[test]
    fn wgsl_declares_the_vertex_entry_point() {
        let module = naga::front::wgsl::parse_str(WGSL_SOURCE).unwrap();
        let ep = module
            .entry_points
            .iter()
            .find(|ep| ep.name == "vs_main")
            .expect("vs_main entry point");
        assert_eq!(ep.stage, naga::ShaderStage::Vertex);
    }

    #[test]
    fn wgsl_binds_locals_at_group_zero_binding_zero() {
        let module = naga::front::wgsl::parse_str(WGSL_SOURCE).unwrap();
        let uniforms: Vec<_> = module
            .global_variables
            .iter()
            .filter(|(_, v)| v.space == naga::AddressSpace::Uniform)
            .collect();
        assert_eq!(uniforms.len(), 1);
        let binding = uniforms[0].1.binding.as_ref().expect("resource binding");
        assert_eq!(binding.group, 0);
        assert_eq!(binding.binding, 0);
    }
}
