//! Circular progress ring with per-segment quality coloring.
//!
//! The ring fills clockwise over a configured duration (the *sweep*) while
//! stretches of it are independently recolored to reflect a quality
//! classification. Recolors are timed transitions layered on top of the
//! sweep; at most one transition may be in flight for any degree.
//!
//! The host owns time: call [`QualityRing::advance`] once per frame with the
//! elapsed time and repaint when it answers [`Redraw::Needed`].
//!
//! # Example
//! ```rust,ignore
//! let mut ring = QualityRing::with_config(
//!     RingConfig::default()
//!         .with_total_animation_duration(Duration::from_secs(10))
//!         .with_text("OK"),
//! );
//! ring.start_sweep();
//!
//! // every frame:
//! if ring.advance(frame.dt).is_needed() {
//!     ring.paint(&mut painter, rect);
//! }
//!
//! // as results arrive:
//! ring.set_quality_at_millis(0, 1_000, Quality::Good);
//! ```

mod compose;
mod config;
mod quality;
mod recolor;
mod segments;
mod sweep;
mod text_fit;
mod units;

use std::cell::Cell;
use std::time::Duration;

use orbis_engine::coords::{Rect, Vec2};

use crate::canvas::Canvas;
use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

pub use compose::RingGeometry;
pub use config::RingConfig;
pub use quality::{Quality, QualityPalette};
pub use recolor::{
    ActiveRecolor, DegreeRange, RecolorError, RecolorId, RecolorOutcome, RecolorRequest,
};
pub use segments::{Segment, SegmentStore, FULL_CIRCLE};
pub use sweep::SweepState;
pub use text_fit::{TextFit, TextFitSolver};
pub use units::{Boundaries, UnitConverter};

use recolor::{RecolorDefaults, RecolorScheduler};
use sweep::{SweepAnimator, SweepTick};

/// Answer of [`QualityRing::advance`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Visible state changed; repaint this frame.
    Needed,
    /// Nothing visible changed.
    Skip,
}

impl Redraw {
    #[inline]
    pub fn is_needed(self) -> bool {
        self == Redraw::Needed
    }
}

/// Label fit remembered between frames, valid for one ring radius.
#[derive(Debug, Clone, Copy)]
struct CachedFit {
    radius: f32,
    fit: Option<TextFit>,
}

/// The quality progress ring widget.
pub struct QualityRing {
    config: RingConfig,
    segments: SegmentStore,
    sweep: SweepAnimator,
    recolors: RecolorScheduler,
    solver: TextFitSolver,
    label_fit: Cell<Option<CachedFit>>,
    /// State changed outside of a tick; the next `advance` reports it.
    dirty: bool,
    on_sweep_complete: Option<Box<dyn FnMut()>>,
}

impl QualityRing {
    pub fn new() -> Self {
        Self::with_config(RingConfig::default())
    }

    pub fn with_config(config: RingConfig) -> Self {
        let segments = SegmentStore::new(config.segment_count(), config.color_unspecified());
        Self {
            config,
            segments,
            sweep: SweepAnimator::new(),
            recolors: RecolorScheduler::new(),
            solver: TextFitSolver::default(),
            label_fit: Cell::new(None),
            dirty: true,
            on_sweep_complete: None,
        }
    }

    /// Called each time a sweep reaches 360°.
    pub fn on_sweep_complete(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_sweep_complete = Some(Box::new(f));
        self
    }

    /// Replaces the label fitting parameters.
    pub fn text_fit_solver(mut self, solver: TextFitSolver) -> Self {
        self.solver = solver;
        self.label_fit.set(None);
        self
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    #[inline]
    pub fn segments(&self) -> &SegmentStore {
        &self.segments
    }

    #[inline]
    pub fn sweep_state(&self) -> SweepState {
        self.sweep.state()
    }

    /// Degrees revealed so far, [0, 360].
    #[inline]
    pub fn sweep_angle(&self) -> f32 {
        self.sweep.angle()
    }

    /// In-flight recolor transitions, in registration order.
    #[inline]
    pub fn active_recolors(&self) -> &[ActiveRecolor] {
        self.recolors.active()
    }

    /// Converter for the current total duration.
    #[inline]
    pub fn unit_converter(&self) -> UnitConverter {
        UnitConverter::new(self.config.total_animation_duration())
    }

    // ── configuration ─────────────────────────────────────────────────────

    /// Edits the configuration in place, then drops the cached label fit and
    /// schedules a redraw.
    ///
    /// A new segment count or unspecified color reaches the segments on the
    /// next [`start_sweep`](Self::start_sweep) or [`clear_colors`](Self::clear_colors).
    pub fn configure(&mut self, f: impl FnOnce(&mut RingConfig)) {
        f(&mut self.config);
        self.label_fit.set(None);
        self.dirty = true;
    }

    // ── sweep ─────────────────────────────────────────────────────────────

    /// Starts the fill animation from 0°, restarting it if already running.
    ///
    /// Every segment returns to the unspecified color and in-flight recolors
    /// are dropped without finishing.
    pub fn start_sweep(&mut self) {
        let dropped = self.recolors.cancel_all();
        self.segments = SegmentStore::new(self.config.segment_count(), self.config.color_unspecified());
        let duration = self.config.total_animation_duration();
        self.sweep.start(duration);
        self.dirty = true;
        log::debug!("sweep started: {duration:?}, {dropped} recolor(s) dropped");
    }

    /// Stops the sweep and every recolor. Colors and the sweep angle stay as they are.
    pub fn cancel(&mut self) {
        let dropped = self.recolors.cancel_all();
        self.sweep.cancel();
        log::debug!("sweep cancelled at {}°, {dropped} recolor(s) dropped", self.sweep.angle());
    }

    // ── recoloring ────────────────────────────────────────────────────────

    /// Submits a recolor and reports what happened or why it was rejected.
    ///
    /// Rejection leaves every segment and transition untouched.
    pub fn try_submit_recolor(&mut self, request: &RecolorRequest) -> Result<RecolorOutcome, RecolorError> {
        let defaults = RecolorDefaults {
            duration: self.config.recolor_animation_duration(),
            from_color: self.config.color_unspecified(),
        };
        let result = self
            .recolors
            .submit(request, self.unit_converter(), defaults, &mut self.segments);

        match &result {
            Ok(outcome) => {
                if *outcome == RecolorOutcome::Applied {
                    self.dirty = true;
                }
                log::debug!("recolor {:?} accepted: {outcome:?}", request.bounds);
            }
            Err(e) => log::debug!("recolor rejected: {e}"),
        }
        result
    }

    /// Boolean form of [`try_submit_recolor`](Self::try_submit_recolor).
    pub fn submit_recolor(&mut self, request: &RecolorRequest) -> bool {
        self.try_submit_recolor(request).is_ok()
    }

    /// Animates `bounds` to the palette color of `quality`.
    pub fn try_set_quality(&mut self, bounds: Boundaries, quality: Quality) -> Result<RecolorOutcome, RecolorError> {
        let color = self
            .config
            .palette()
            .color_for(quality, self.config.color_unspecified());
        self.try_submit_recolor(&RecolorRequest { bounds, color, ..RecolorRequest::default() })
    }

    pub fn set_quality(&mut self, bounds: Boundaries, quality: Quality) -> bool {
        self.try_set_quality(bounds, quality).is_ok()
    }

    pub fn set_quality_at_degrees(&mut self, from: i64, to: i64, quality: Quality) -> bool {
        self.set_quality(Boundaries::Degrees { from, to }, quality)
    }

    pub fn set_quality_at_millis(&mut self, from: i64, to: i64, quality: Quality) -> bool {
        self.set_quality(Boundaries::Millis { from, to }, quality)
    }

    pub fn set_quality_at_seconds(&mut self, from: i64, to: i64, quality: Quality) -> bool {
        self.set_quality(Boundaries::Seconds { from, to }, quality)
    }

    /// Paints every segment with the unspecified color. The sweep is untouched.
    pub fn clear_colors(&mut self) {
        self.segments.reset(self.config.color_unspecified());
        self.dirty = true;
    }

    // ── ticking ───────────────────────────────────────────────────────────

    /// Advances the sweep, then every recolor in registration order, by `dt`.
    ///
    /// While the sweep runs its own progress implies a redraw; once it has
    /// completed, recolor ticks are what keep the ring repainting.
    pub fn advance(&mut self, dt: Duration) -> Redraw {
        let mut redraw = std::mem::take(&mut self.dirty);

        match self.sweep.advance(dt) {
            SweepTick::Inactive => {}
            SweepTick::Progressed => redraw = true,
            SweepTick::Completed => {
                redraw = true;
                log::debug!("sweep complete");
                if let Some(f) = &mut self.on_sweep_complete {
                    f();
                }
            }
        }

        let recolored = self.recolors.tick(dt, &mut self.segments);
        if recolored && self.sweep.is_completed() {
            redraw = true;
        }

        if redraw { Redraw::Needed } else { Redraw::Skip }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Emits this frame's draw calls for the ring placed in `rect`.
    pub fn draw(&self, canvas: &mut impl Canvas, rect: Rect) {
        let geometry = RingGeometry::new(rect, self.config.padding(), self.config.stroke_width());

        compose::draw_idle_track(canvas, &geometry, &self.config);
        compose::draw_segments(canvas, &geometry, &self.config, &self.segments, self.sweep.angle());

        if self.config.text().is_empty() {
            return;
        }
        if let Some(fit) = self.label_fit(canvas, &geometry) {
            compose::draw_label(canvas, &geometry, &self.config, &fit);
        }
    }

    fn label_fit(&self, canvas: &impl Canvas, geometry: &RingGeometry) -> Option<TextFit> {
        if let Some(cached) = self.label_fit.get().filter(|c| c.radius == geometry.radius) {
            return cached.fit;
        }

        let text = self.config.text();
        let font = self.config.label_font();
        let fit = self.solver.solve(
            |size| canvas.measure_text(text, font, size),
            geometry.radius,
            self.config.stroke_width(),
            self.config.max_text_size(),
        );
        self.label_fit.set(Some(CachedFit { radius: geometry.radius, fit }));
        fit
    }
}

impl Default for QualityRing {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for QualityRing {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let side = constraints.max.x.min(constraints.max.y);
        let side = if side.is_finite() { side } else { 200.0 };
        constraints.constrain(Vec2::new(side, side))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.draw(painter, rect);
    }
}
