use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Shrinks the rectangle by `d` on every side. Size never goes negative.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        Rect::new(
            self.origin.x + d,
            self.origin.y + d,
            (self.size.x - 2.0 * d).max(0.0),
            (self.size.y - 2.0 * d).max(0.0),
        )
    }

    /// Largest square centered inside this rectangle.
    ///
    /// The shorter side wins; the square is centered along the longer axis.
    #[inline]
    pub fn centered_square(self) -> Self {
        let side = self.size.x.min(self.size.y).max(0.0);
        Rect::new(
            self.origin.x + (self.size.x - side) * 0.5,
            self.origin.y + (self.size.y - side) * 0.5,
            side,
            side,
        )
    }
}
