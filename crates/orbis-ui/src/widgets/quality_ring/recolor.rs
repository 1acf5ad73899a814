use std::fmt;
use std::time::Duration;

use orbis_engine::paint::Color;
use orbis_engine::time::{Easing, Phase, Tween};

use super::segments::{SegmentStore, FULL_CIRCLE};
use super::units::{Boundaries, RawDegrees, UnitConverter};

// ── request ───────────────────────────────────────────────────────────────

/// A request to recolor a stretch of the ring.
///
/// Built with named fields; unspecified fields come from `Default`:
///
/// ```rust,ignore
/// RecolorRequest {
///     bounds: Boundaries::Millis { from: 0, to: 1_000 },
///     color: Color::from_argb(0xFF4CAF50),
///     ..RecolorRequest::default()
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RecolorRequest {
    pub bounds: Boundaries,
    pub color: Color,
    /// Transition length. `Duration::ZERO` uses the ring's recolor duration.
    pub duration: Duration,
    pub easing: Easing,
    /// When false the range is written immediately and nothing is tracked.
    pub animate: bool,
}

impl RecolorRequest {
    pub fn degrees(from: i64, to: i64, color: Color) -> Self {
        Self { bounds: Boundaries::Degrees { from, to }, color, ..Self::default() }
    }

    pub fn millis(from: i64, to: i64, color: Color) -> Self {
        Self { bounds: Boundaries::Millis { from, to }, color, ..Self::default() }
    }

    pub fn seconds(from: i64, to: i64, color: Color) -> Self {
        Self { bounds: Boundaries::Seconds { from, to }, color, ..Self::default() }
    }
}

impl Default for RecolorRequest {
    fn default() -> Self {
        Self {
            bounds: Boundaries::default(),
            color: Color::transparent(),
            duration: Duration::ZERO,
            easing: Easing::Decelerate(1.0),
            animate: true,
        }
    }
}

// ── ranges & outcomes ─────────────────────────────────────────────────────

/// Validated half-open degree range `[from, to)` with `0 <= from <= to <= 360`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DegreeRange {
    pub from: u16,
    pub to: u16,
}

impl DegreeRange {
    /// Checks that both ends lie in [0, 360]. An inverted range inside the
    /// bounds collapses to the empty range at `from`.
    pub fn new(raw: RawDegrees) -> Result<Self, RecolorError> {
        let RawDegrees { from, to } = raw;
        let circle = 0..=i64::from(FULL_CIRCLE);
        if !circle.contains(&from) || !circle.contains(&to) {
            return Err(RecolorError::InvalidBoundary { from, to });
        }
        // Both fit in u16: 0 <= from, to <= 360.
        let (from, to) = (from as u16, to as u16);
        Ok(Self { from, to: to.max(from) })
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.from >= self.to
    }

    #[inline]
    pub fn contains(self, deg: u16) -> bool {
        self.from <= deg && deg < self.to
    }

    /// Half-open intersection test. Touching ranges do not overlap.
    #[inline]
    pub fn overlaps(self, other: DegreeRange) -> bool {
        self.from < other.to && other.from < self.to
    }

    /// Whether a new request for `self` must wait for the running `active`
    /// range: they intersect, or `self` ends on a degree `active` covers.
    #[inline]
    pub fn conflicts_with(self, active: DegreeRange) -> bool {
        self.overlaps(active) || active.contains(self.to)
    }
}

impl fmt::Display for DegreeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}°, {}°)", self.from, self.to)
    }
}

/// Identifies an in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecolorId(u64);

/// What an accepted request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecolorOutcome {
    /// Non-animated request; the range already holds the target color.
    Applied,
    /// Animated request; a transition is now in flight.
    Scheduled(RecolorId),
    /// The range resolved to zero degrees, or was inverted; nothing to do.
    Empty,
}

/// Why a request was turned down. Rejection never mutates any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecolorError {
    /// Resolved degrees fall outside [0, 360].
    InvalidBoundary { from: i64, to: i64 },
    /// The range conflicts with a transition that is still running.
    Overlap { requested: DegreeRange, active: DegreeRange },
}

impl fmt::Display for RecolorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecolorError::InvalidBoundary { from, to } => {
                write!(f, "recolor bounds {from}°..{to}° outside 0°..{FULL_CIRCLE}°")
            }
            RecolorError::Overlap { requested, active } => {
                write!(f, "recolor {requested} overlaps running transition {active}")
            }
        }
    }
}

impl std::error::Error for RecolorError {}

// ── active transitions ────────────────────────────────────────────────────

/// Runtime state of an accepted, animated request.
///
/// Holds only its range and interpolation parameters; colors are written
/// straight into the [`SegmentStore`].
#[derive(Debug, Clone)]
pub struct ActiveRecolor {
    id: RecolorId,
    range: DegreeRange,
    from_color: Color,
    to_color: Color,
    easing: Easing,
    timer: Tween,
}

impl ActiveRecolor {
    #[inline]
    pub fn id(&self) -> RecolorId {
        self.id
    }

    #[inline]
    pub fn range(&self) -> DegreeRange {
        self.range
    }

    #[inline]
    pub fn from_color(&self) -> Color {
        self.from_color
    }

    #[inline]
    pub fn to_color(&self) -> Color {
        self.to_color
    }

    /// Linear elapsed fraction, before easing.
    #[inline]
    pub fn elapsed_fraction(&self) -> f32 {
        self.timer.phase().fraction()
    }

    /// Advances the timer and writes the interpolated color. Returns true
    /// once the transition has written its final color.
    fn step(&mut self, dt: Duration, store: &mut SegmentStore) -> bool {
        let (color, done) = match self.timer.advance(dt) {
            Phase::Running { fraction } => {
                (self.from_color.lerp(self.to_color, self.easing.apply(fraction)), false)
            }
            Phase::Completed => (self.to_color, true),
        };
        store.set_color_range(self.range.from, self.range.to, color);
        done
    }
}

/// Values the ring supplies when a request leaves them open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecolorDefaults {
    /// Used when the request's duration is zero.
    pub duration: Duration,
    /// Starting color of every transition (the ring's unspecified color).
    pub from_color: Color,
}

// ── scheduler ─────────────────────────────────────────────────────────────

/// Accepts recolor requests and drives their transitions.
///
/// Invariant: the ranges of active transitions never overlap. The check runs
/// at submission only; ticks never re-validate.
#[derive(Debug, Clone, Default)]
pub struct RecolorScheduler {
    active: Vec<ActiveRecolor>,
    next_id: u64,
}

impl RecolorScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions in registration order.
    #[inline]
    pub fn active(&self) -> &[ActiveRecolor] {
        &self.active
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Validates and applies `request`.
    ///
    /// Non-animated requests write through immediately. Animated ones are
    /// rejected when they intersect a running transition or end on a degree
    /// one covers.
    pub fn submit(
        &mut self,
        request: &RecolorRequest,
        converter: UnitConverter,
        defaults: RecolorDefaults,
        store: &mut SegmentStore,
    ) -> Result<RecolorOutcome, RecolorError> {
        let range = DegreeRange::new(converter.resolve(request.bounds))?;
        if range.is_empty() {
            return Ok(RecolorOutcome::Empty);
        }

        if !request.animate {
            store.set_color_range(range.from, range.to, request.color);
            return Ok(RecolorOutcome::Applied);
        }

        if let Some(busy) = self.active.iter().find(|a| range.conflicts_with(a.range)) {
            return Err(RecolorError::Overlap { requested: range, active: busy.range });
        }

        let duration = if request.duration.is_zero() { defaults.duration } else { request.duration };
        let id = RecolorId(self.next_id);
        self.next_id += 1;

        self.active.push(ActiveRecolor {
            id,
            range,
            from_color: defaults.from_color,
            to_color: request.color,
            easing: request.easing,
            timer: Tween::new(duration),
        });
        Ok(RecolorOutcome::Scheduled(id))
    }

    /// Advances every transition by `dt`, in registration order.
    ///
    /// Returns true when at least one transition wrote colors.
    pub fn tick(&mut self, dt: Duration, store: &mut SegmentStore) -> bool {
        if self.active.is_empty() {
            return false;
        }
        self.active.retain_mut(|a| {
            let done = a.step(dt, store);
            if done {
                log::trace!("recolor {:?} {} finished", a.id, a.range);
            }
            !done
        });
        true
    }

    /// Drops every transition without finishing it. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.active.len();
        self.active.clear();
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray() -> Color { Color::from_argb(0xFF888888) }
    fn red() -> Color { Color::from_argb(0xFFFF0000) }
    fn green() -> Color { Color::from_argb(0xFF00FF00) }
    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    struct Fixture {
        scheduler: RecolorScheduler,
        store: SegmentStore,
        converter: UnitConverter,
        defaults: RecolorDefaults,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                scheduler: RecolorScheduler::new(),
                store: SegmentStore::per_degree(gray()),
                converter: UnitConverter::new(ms(10_000)),
                defaults: RecolorDefaults { duration: ms(500), from_color: gray() },
            }
        }

        fn submit(&mut self, req: RecolorRequest) -> Result<RecolorOutcome, RecolorError> {
            self.scheduler.submit(&req, self.converter, self.defaults, &mut self.store)
        }

        fn tick(&mut self, dt: Duration) -> bool {
            self.scheduler.tick(dt, &mut self.store)
        }
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn out_of_bounds_is_rejected_without_mutation() {
        let mut fx = Fixture::new();
        let before = fx.store.clone();
        for (from, to) in [(-1, 10), (0, 361), (-30, 400)] {
            let err = fx.submit(RecolorRequest::degrees(from, to, red())).unwrap_err();
            assert_eq!(err, RecolorError::InvalidBoundary { from, to });
            let err = fx
                .submit(RecolorRequest { animate: false, ..RecolorRequest::degrees(from, to, red()) })
                .unwrap_err();
            assert!(matches!(err, RecolorError::InvalidBoundary { .. }));
        }
        assert_eq!(fx.store, before);
        assert!(fx.scheduler.is_idle());
    }

    #[test]
    fn inverted_range_in_bounds_is_a_noop() {
        let mut fx = Fixture::new();
        let before = fx.store.clone();
        assert_eq!(fx.submit(RecolorRequest::degrees(90, 10, red())), Ok(RecolorOutcome::Empty));
        let req = RecolorRequest { animate: false, ..RecolorRequest::degrees(90, 10, red()) };
        assert_eq!(fx.submit(req), Ok(RecolorOutcome::Empty));
        assert_eq!(fx.store, before);
        assert!(fx.scheduler.is_idle());
    }

    #[test]
    fn inverted_range_out_of_bounds_is_rejected() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.submit(RecolorRequest::degrees(400, 10, red())),
            Err(RecolorError::InvalidBoundary { from: 400, to: 10 })
        );
        assert_eq!(
            fx.submit(RecolorRequest::degrees(90, -10, red())),
            Err(RecolorError::InvalidBoundary { from: 90, to: -10 })
        );
    }

    #[test]
    fn empty_range_is_accepted_as_noop() {
        let mut fx = Fixture::new();
        assert_eq!(fx.submit(RecolorRequest::degrees(40, 40, red())), Ok(RecolorOutcome::Empty));
        assert!(fx.scheduler.is_idle());
    }

    #[test]
    fn millis_beyond_total_are_rejected() {
        let mut fx = Fixture::new();
        // 10_028 ms of 10 s is 361°.
        assert!(fx.submit(RecolorRequest::millis(9_000, 10_028, red())).is_err());
        assert!(fx.scheduler.is_idle());
    }

    #[test]
    fn millis_flooring_to_full_circle_are_accepted() {
        let mut fx = Fixture::new();
        // 10_001 ms floors to exactly 360°.
        let outcome = fx.submit(RecolorRequest::millis(9_000, 10_001, red()));
        assert!(matches!(outcome, Ok(RecolorOutcome::Scheduled(_))));
        assert_eq!(fx.scheduler.active()[0].range(), DegreeRange { from: 324, to: 360 });
    }

    // ── immediate writes ──────────────────────────────────────────────────

    #[test]
    fn non_animated_writes_immediately() {
        let mut fx = Fixture::new();
        let req = RecolorRequest { animate: false, ..RecolorRequest::degrees(0, 90, red()) };
        assert_eq!(fx.submit(req), Ok(RecolorOutcome::Applied));
        assert!(fx.scheduler.is_idle());
        assert!(fx.store.segments()[..90].iter().all(|s| s.color == red()));
        assert_eq!(fx.store.color_at(90), gray());
    }

    #[test]
    fn non_animated_ignores_running_transitions() {
        let mut fx = Fixture::new();
        fx.submit(RecolorRequest::degrees(0, 90, red())).unwrap();
        let req = RecolorRequest { animate: false, ..RecolorRequest::degrees(45, 135, green()) };
        assert_eq!(fx.submit(req), Ok(RecolorOutcome::Applied));
    }

    // ── overlap policy ────────────────────────────────────────────────────

    #[test]
    fn overlapping_second_request_is_rejected() {
        let mut fx = Fixture::new();
        assert!(matches!(
            fx.submit(RecolorRequest::degrees(0, 90, red())),
            Ok(RecolorOutcome::Scheduled(_))
        ));
        let err = fx.submit(RecolorRequest::degrees(45, 135, green())).unwrap_err();
        assert_eq!(
            err,
            RecolorError::Overlap {
                requested: DegreeRange { from: 45, to: 135 },
                active: DegreeRange { from: 0, to: 90 },
            }
        );
        assert_eq!(fx.scheduler.active().len(), 1);

        fx.tick(ms(500));
        assert!(fx.store.segments()[..90].iter().all(|s| s.color == red()));
        assert!(fx.store.segments()[90..].iter().all(|s| s.color == gray()));
    }

    #[test]
    fn enclosing_range_is_rejected() {
        let mut fx = Fixture::new();
        fx.submit(RecolorRequest::degrees(40, 50, red())).unwrap();
        assert!(fx.submit(RecolorRequest::degrees(0, 360, green())).is_err());
    }

    #[test]
    fn range_starting_at_active_end_is_accepted() {
        let mut fx = Fixture::new();
        fx.submit(RecolorRequest::degrees(0, 36, red())).unwrap();
        assert!(fx.submit(RecolorRequest::degrees(36, 72, green())).is_ok());
        assert_eq!(fx.scheduler.active().len(), 2);
    }

    #[test]
    fn range_ending_at_active_start_is_rejected() {
        let mut fx = Fixture::new();
        fx.submit(RecolorRequest::degrees(36, 72, red())).unwrap();
        assert_eq!(
            fx.submit(RecolorRequest::degrees(0, 36, green())),
            Err(RecolorError::Overlap {
                requested: DegreeRange { from: 0, to: 36 },
                active: DegreeRange { from: 36, to: 72 },
            })
        );
        assert_eq!(fx.scheduler.active().len(), 1);
        assert_eq!(fx.store.color_at(0), gray());
    }

    #[test]
    fn range_ending_at_full_circle_never_hits_end_rule() {
        let mut fx = Fixture::new();
        fx.submit(RecolorRequest::degrees(0, 36, red())).unwrap();
        assert!(fx.submit(RecolorRequest::degrees(324, 360, green())).is_ok());
    }

    #[test]
    fn range_frees_up_after_completion() {
        let mut fx = Fixture::new();
        fx.submit(RecolorRequest::degrees(0, 90, red())).unwrap();
        fx.tick(ms(500));
        assert!(fx.scheduler.is_idle());
        assert!(fx.submit(RecolorRequest::degrees(0, 90, green())).is_ok());
    }

    // ── interpolation ─────────────────────────────────────────────────────

    #[test]
    fn transition_interpolates_then_lands_exactly() {
        let mut fx = Fixture::new();
        let req = RecolorRequest {
            easing: Easing::Linear,
            duration: ms(1_000),
            ..RecolorRequest::degrees(10, 20, red())
        };
        fx.submit(req).unwrap();

        assert!(fx.tick(ms(500)));
        let mid = fx.store.color_at(15);
        assert_eq!(mid, gray().lerp(red(), 0.5));
        assert_eq!(fx.scheduler.active()[0].elapsed_fraction(), 0.5);

        assert!(fx.tick(ms(500)));
        assert!(fx.store.segments()[10..20].iter().all(|s| s.color == red()));
        assert!(fx.scheduler.is_idle());
        assert!(!fx.tick(ms(16)));
    }

    #[test]
    fn easing_shapes_the_blend() {
        let mut fx = Fixture::new();
        fx.submit(RecolorRequest {
            duration: ms(1_000),
            easing: Easing::Decelerate(1.0),
            ..RecolorRequest::degrees(0, 1, red())
        })
        .unwrap();
        fx.tick(ms(500));
        assert_eq!(fx.store.color_at(0), gray().lerp(red(), 0.75));
    }

    #[test]
    fn zero_duration_falls_back_to_default() {
        let mut fx = Fixture::new();
        fx.submit(RecolorRequest::degrees(0, 10, red())).unwrap();
        fx.tick(ms(499));
        assert_eq!(fx.scheduler.active().len(), 1);
        fx.tick(ms(1));
        assert!(fx.scheduler.is_idle());
        assert_eq!(fx.store.color_at(5), red());
    }

    #[test]
    fn transitions_start_from_the_unspecified_color() {
        let mut fx = Fixture::new();
        fx.store.set_color_range(0, 10, green());
        fx.submit(RecolorRequest::degrees(0, 10, red())).unwrap();
        assert_eq!(fx.scheduler.active()[0].from_color(), gray());
        assert_eq!(fx.scheduler.active()[0].to_color(), red());
    }

    #[test]
    fn cancel_all_drops_in_flight_state() {
        let mut fx = Fixture::new();
        fx.submit(RecolorRequest::degrees(0, 10, red())).unwrap();
        fx.submit(RecolorRequest::degrees(10, 20, red())).unwrap();
        assert_eq!(fx.scheduler.cancel_all(), 2);
        assert!(!fx.tick(ms(500)));
    }

    #[test]
    fn ids_are_unique() {
        let mut fx = Fixture::new();
        let a = fx.submit(RecolorRequest::degrees(0, 10, red())).unwrap();
        let b = fx.submit(RecolorRequest::degrees(10, 20, red())).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn error_messages_name_the_ranges() {
        let e = RecolorError::Overlap {
            requested: DegreeRange { from: 45, to: 135 },
            active: DegreeRange { from: 0, to: 90 },
        };
        assert_eq!(e.to_string(), "recolor [45°, 135°) overlaps running transition [0°, 90°)");
    }
}
