//! Orbis UI: the quality progress ring and the painting seam it draws through.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use orbis_ui::prelude::*;
//!
//! let mut ring = QualityRing::with_config(RingConfig::default().with_text("OK"));
//! ring.start_sweep();
//!
//! // In your frame callback:
//! if ring.advance(frame.dt).is_needed() {
//!     draw_list.clear();
//!     let mut painter = Painter::new(&mut draw_list, &fonts);
//!     ring.paint(&mut painter, viewport);
//! }
//! // Pass draw_list to your renderer.
//!
//! // Whenever a measurement is classified:
//! ring.set_quality_at_millis(2_000, 3_000, Quality::Bad);
//! ```
//!
//! # Custom backends
//!
//! [`QualityRing::draw`](widgets::quality_ring::QualityRing::draw) accepts any
//! [`Canvas`]. Implement it to drive a different renderer directly:
//!
//! ```rust,ignore
//! use orbis_ui::prelude::*;
//!
//! struct SvgCanvas { out: String }
//!
//! impl Canvas for SvgCanvas {
//!     fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 { /* ... */ }
//!     fn draw_arc(&mut self, oval: Rect, start_deg: f32, sweep_deg: f32, stroke: Stroke) { /* ... */ }
//!     fn draw_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) { /* ... */ }
//!     fn draw_text(&mut self, text: &str, font: FontId, size: f32, color: Color, origin: Vec2) { /* ... */ }
//! }
//! ```

pub mod canvas;
pub mod constraints;
pub mod painter;
pub mod widget;
pub mod widgets;

/// Everything a host needs to drive a ring; import this in your app code.
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::painter::Painter;
    pub use crate::widget::Widget;
    pub use crate::widgets::quality_ring::{
        Boundaries, Quality, QualityPalette, QualityRing, RecolorError, RecolorOutcome,
        RecolorRequest, Redraw, RingConfig, SweepState,
    };

    // Re-export the engine primitives everyone needs.
    pub use orbis_engine::coords::{Rect, Vec2};
    pub use orbis_engine::paint::{Color, Stroke};
    pub use orbis_engine::scene::DrawList;
    pub use orbis_engine::text::{FontId, FontSystem};
    pub use orbis_engine::time::{Easing, FrameClock};
}
