//! Turns ring state into canvas calls.
//!
//! Paint order per frame: idle track, revealed segment arcs, label.

use orbis_engine::coords::{Rect, Vec2};
use orbis_engine::paint::Stroke;

use crate::canvas::Canvas;
use crate::constraints::{inset_rect, Edges};

use super::config::RingConfig;
use super::segments::SegmentStore;
use super::text_fit::TextFit;

/// Where the ring sits inside the rectangle a host gives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Largest square centered in the host rect, padding included.
    pub bounds: Rect,
    pub center: Vec2,
    /// Half the side of `bounds`.
    pub radius: f32,
    /// Oval the segment arcs are cut from: the padded square inset by half the stroke.
    pub arc_oval: Rect,
}

impl RingGeometry {
    pub fn new(rect: Rect, padding: Edges, stroke_width: f32) -> Self {
        let bounds = rect.centered_square();
        let arc_oval = inset_rect(bounds, padding).inset(stroke_width / 2.0);
        Self {
            bounds,
            center: bounds.center(),
            radius: bounds.size.x / 2.0,
            arc_oval,
        }
    }
}

/// The always-visible double circle behind the arcs.
///
/// The outer circle hugs the bounds; the inner one sits a stroke width
/// further in, so together they outline the band the arcs fill.
pub fn draw_idle_track(canvas: &mut impl Canvas, geometry: &RingGeometry, config: &RingConfig) {
    let idle = Stroke::new(config.idle_stroke_width(), config.idle_stroke_color());
    if !idle.is_visible() {
        return;
    }

    let outer = geometry.radius - idle.width / 2.0;
    if outer < 0.0 {
        return;
    }
    canvas.draw_circle(geometry.center, outer, idle);

    let inner = outer - config.stroke_width() + idle.width;
    if inner < 0.0 {
        return;
    }
    canvas.draw_circle(geometry.center, inner, idle);
}

/// One arc per segment that starts before `sweep_deg`, clipped to the sweep.
pub fn draw_segments(
    canvas: &mut impl Canvas,
    geometry: &RingGeometry,
    config: &RingConfig,
    segments: &SegmentStore,
    sweep_deg: f32,
) {
    let rotation = config.rotation_offset_deg();
    for segment in segments.segments() {
        let visible = segment.visible_sweep(sweep_deg);
        if visible <= 0.0 {
            // Segments are ordered; everything after this one is hidden too.
            break;
        }
        canvas.draw_arc(
            geometry.arc_oval,
            segment.start_deg + rotation,
            visible,
            Stroke::new(config.stroke_width(), segment.color),
        );
    }
}

/// Label centered on the ring at the fitted size.
pub fn draw_label(canvas: &mut impl Canvas, geometry: &RingGeometry, config: &RingConfig, fit: &TextFit) {
    let origin = geometry.center - fit.bounds / 2.0;
    canvas.draw_text(config.text(), config.label_font(), fit.size, config.text_color(), origin);
}
