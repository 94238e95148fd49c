/// Viewport size in logical pixels.
///
/// The orthographic projection treats this as the coordinate basis for
/// mapping logical px positions to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Clamps each axis to at least one logical pixel.
    ///
    /// wgpu cannot present a zero-sized surface and a zero-sized basis would
    /// produce a non-finite projection, so degraded sizes degrade to 1x1.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(1.0),
            height: self.height.max(1.0),
        }
    }
}
