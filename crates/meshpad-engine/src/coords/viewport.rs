/// Viewport size in logical pixels.
///
/// Renderers use it to size screen-space geometry (vertex markers) in pixels.
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

    /// `width / height`. Only meaningful when [`is_valid`](Self::is_valid).
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }
}
