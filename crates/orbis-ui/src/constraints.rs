use orbis_engine::coords::{Rect, Vec2};
use orbis_engine::text::FontSystem;

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }

    /// True when every side is finite and non-negative.
    #[inline]
    pub fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Shrinks `rect` by `edges`, clamping the size at zero.
pub fn inset_rect(rect: Rect, edges: Edges) -> Rect {
    Rect::new(
        rect.origin.x + edges.left,
        rect.origin.y + edges.top,
        (rect.size.x - edges.h()).max(0.0),
        (rect.size.y - edges.v()).max(0.0),
    )
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. `max` may be infinite on an
/// axis the parent does not bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Anything from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// Exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Clamps `size` into `[min, max]` on both axes.
    #[inline]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.clamp(self.min.x, self.max.x.max(self.min.x)),
            size.y.clamp(self.min.y, self.max.y.max(self.min.y)),
        )
    }
}

// ── LayoutCtx ─────────────────────────────────────────────────────────────

/// Shared resources available while measuring.
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints::loose(Vec2::new(50.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 20.0)), Vec2::new(50.0, 20.0));
    }

    #[test]
    fn tight_pins_size() {
        let c = Constraints::tight(Vec2::new(40.0, 30.0));
        assert_eq!(c.constrain(Vec2::new(1.0, 1000.0)), Vec2::new(40.0, 30.0));
    }

    #[test]
    fn inset_rect_asymmetric_padding() {
        let rect = Rect::new(5.0, 5.0, 100.0, 60.0);
        let edges = Edges { top: 4.0, bottom: 8.0, left: 6.0, right: 10.0 };
        assert_eq!(inset_rect(rect, edges), Rect::new(11.0, 9.0, 84.0, 48.0));
    }

    #[test]
    fn negative_edges_are_invalid() {
        assert!(Edges::all(2.0).is_valid());
        assert!(!Edges { left: -1.0, ..Edges::default() }.is_valid());
    }
}
