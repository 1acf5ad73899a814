use std::time::Duration;

use super::segments::FULL_CIRCLE;

/// Bounds of a recolor request in one of three units.
///
/// Time-based bounds are positions along the sweep: a sweep lasting the total
/// duration reaches 360° at its end, so `Millis { from: 0, to: total }`
/// covers the whole ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundaries {
    Degrees { from: i64, to: i64 },
    Millis { from: i64, to: i64 },
    Seconds { from: i64, to: i64 },
}

impl Default for Boundaries {
    fn default() -> Self {
        Boundaries::Degrees { from: 0, to: 0 }
    }
}

/// Resolved request bounds in whole degrees, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDegrees {
    pub from: i64,
    pub to: i64,
}

/// Degree/time conversion for one total sweep duration.
///
/// Build a fresh converter from the current configuration at each call site:
/// a duration changed later never rescales values converted earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitConverter {
    total_millis: i128,
}

impl UnitConverter {
    /// `total` is clamped to at least one millisecond.
    pub fn new(total: Duration) -> Self {
        Self { total_millis: total.as_millis().max(1) as i128 }
    }

    /// `floor(millis / total · 360)`, computed exactly on integers.
    pub fn degrees_from_millis(&self, millis: i64) -> i64 {
        let scaled = i128::from(millis) * i128::from(FULL_CIRCLE);
        let deg = scaled.div_euclid(self.total_millis);
        deg.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    pub fn degrees_from_seconds(&self, seconds: i64) -> i64 {
        self.degrees_from_millis(seconds.saturating_mul(1000))
    }

    /// Resolves `bounds` to degrees. Degree input passes through unchanged.
    pub fn resolve(&self, bounds: Boundaries) -> RawDegrees {
        match bounds {
            Boundaries::Degrees { from, to } => RawDegrees { from, to },
            Boundaries::Millis { from, to } => RawDegrees {
                from: self.degrees_from_millis(from),
                to: self.degrees_from_millis(to),
            },
            Boundaries::Seconds { from, to } => RawDegrees {
                from: self.degrees_from_seconds(from),
                to: self.degrees_from_seconds(to),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conv(total_ms: u64) -> UnitConverter {
        UnitConverter::new(Duration::from_millis(total_ms))
    }

    #[test]
    fn millis_endpoints_map_to_full_circle() {
        let c = conv(10_000);
        assert_eq!(c.degrees_from_millis(0), 0);
        assert_eq!(c.degrees_from_millis(10_000), 360);
    }

    #[test]
    fn millis_floor_toward_negative_infinity() {
        let c = conv(10_000);
        assert_eq!(c.degrees_from_millis(5_000), 180);
        assert_eq!(c.degrees_from_millis(27), 0); // 0.972°
        assert_eq!(c.degrees_from_millis(28), 1); // 1.008°
        assert_eq!(c.degrees_from_millis(-1), -1);
    }

    #[test]
    fn seconds_scale_through_millis() {
        let c = conv(10_000);
        assert_eq!(c.degrees_from_seconds(5), 180);
        assert_eq!(c.degrees_from_seconds(10), 360);
        assert_eq!(c.degrees_from_seconds(11), 396);
    }

    #[test]
    fn odd_total_still_hits_360_exactly() {
        let c = conv(7_001);
        assert_eq!(c.degrees_from_millis(7_001), 360);
        assert_eq!(c.degrees_from_millis(0), 0);
    }

    #[test]
    fn resolve_passes_degrees_through() {
        let c = conv(1_000);
        assert_eq!(c.resolve(Boundaries::Degrees { from: -5, to: 400 }), RawDegrees { from: -5, to: 400 });
        assert_eq!(c.resolve(Boundaries::Millis { from: 250, to: 500 }), RawDegrees { from: 90, to: 180 });
        assert_eq!(c.resolve(Boundaries::Seconds { from: 0, to: 1 }), RawDegrees { from: 0, to: 360 });
    }

    #[test]
    fn zero_total_is_treated_as_one_millisecond() {
        let c = UnitConverter::new(Duration::ZERO);
        assert_eq!(c.degrees_from_millis(1), 360);
    }
}
