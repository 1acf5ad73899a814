use orbis_engine::coords::{Rect, Vec2};
use orbis_engine::paint::{Color, Stroke};
use orbis_engine::text::FontId;

/// Drawing capability a widget paints through.
///
/// Widgets describe *what* to draw; the implementor decides how. [`Painter`]
/// records into the engine's `DrawList`; tests can record calls directly.
///
/// Angles are degrees, 0° at three o'clock, sweeping clockwise.
///
/// [`Painter`]: crate::painter::Painter
pub trait Canvas {
    /// Tight bounding box of `text` rendered at `size`, in logical pixels.
    fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2;

    /// Stroked arc cut from the ellipse inscribed in `oval`.
    fn draw_arc(&mut self, oval: Rect, start_deg: f32, sweep_deg: f32, stroke: Stroke);

    /// Stroked, unfilled circle.
    fn draw_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke);

    /// Single line of text with its top-left at `origin`.
    fn draw_text(&mut self, text: &str, font: FontId, size: f32, color: Color, origin: Vec2);
}
