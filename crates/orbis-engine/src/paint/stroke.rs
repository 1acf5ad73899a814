use super::Color;

/// Outline drawn along a path (arc or circle), centered on the path.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// Zero-width or fully transparent strokes draw nothing.
    #[inline]
    pub fn is_visible(self) -> bool {
        self.width > 0.0 && self.color.a > 0.0
    }
}
