use orbis_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;

/// The core trait every UI component implements.
///
/// Widgets are driven by the host: it measures them, hands them a rectangle
/// and asks them to paint once per frame. Animation state advances outside
/// of `paint`, so painting the same state twice yields the same commands.
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic. The parent may call `measure` multiple times.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}
