use orbis_engine::coords::{Rect, Vec2};
use orbis_engine::paint::{Color, Stroke};
use orbis_engine::scene::{DrawList, ZIndex};
use orbis_engine::text::{FontId, FontSystem};

use crate::canvas::Canvas;

/// Drawing surface passed to [`Widget::paint`].
///
/// Wraps the engine's `DrawList` with a high-level API. Every call lands on
/// its own z-layer, so paint order equals call order.
///
/// [`Widget::paint`]: crate::widget::Widget::paint
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    font_system: &'a FontSystem,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem) -> Self {
        Self { draw_list, font_system, z: 0 }
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

impl Canvas for Painter<'_> {
    fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.font_system.ink_bounds(text, font, size)
    }

    fn draw_arc(&mut self, oval: Rect, start_deg: f32, sweep_deg: f32, stroke: Stroke) {
        let z = self.next_z();
        self.draw_list.push_arc(z, oval, start_deg, sweep_deg, stroke);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, stroke);
    }

    fn draw_text(&mut self, text: &str, font: FontId, size: f32, color: Color, origin: Vec2) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbis_engine::scene::DrawCmd;

    #[test]
    fn calls_are_recorded_in_paint_order() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let stroke = Stroke::new(4.0, Color::from_argb(0xFF00FF00));
        {
            let mut painter = Painter::new(&mut list, &fonts);
            painter.draw_circle(Vec2::new(50.0, 50.0), 40.0, stroke);
            painter.draw_arc(Rect::new(0.0, 0.0, 100.0, 100.0), 0.0, 45.0, stroke);
            painter.draw_text("OK", FontId::default(), 12.0, Color::from_argb(0xFF000000), Vec2::zero());
        }

        let kinds: Vec<_> = list.iter_in_paint_order().map(|i| i.cmd.kind()).collect();
        assert_eq!(kinds, vec!["circle", "arc", "text"]);
        match &list.items()[1].cmd {
            DrawCmd::Arc(arc) => assert_eq!(arc.end_deg(), 45.0),
            other => panic!("expected arc, got {other:?}"),
        }
    }
}
