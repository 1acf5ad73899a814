use orbis_engine::coords::Vec2;

/// Result of fitting a label inside the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFit {
    /// Chosen font size in logical pixels.
    pub size: f32,
    /// Measured bounds of the text at `size`.
    pub bounds: Vec2,
    /// Number of measurements the search took (the max-size re-measure excluded).
    pub iterations: u32,
}

/// Iterative search for the largest label size that stays inside the ring.
///
/// Glyph metrics are only known after measuring, so the solver probes:
/// an overshoot halves the size, an undershoot beyond `tolerance` moves up by
/// half the gap to the previous size. It stops once the farthest corner of
/// the centered text box lies within `tolerance` inside the available radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFitSolver {
    pub probe_size: f32,
    /// Starting value of the remembered previous size.
    pub initial_bound: f32,
    pub tolerance: f32,
    pub max_iterations: u32,
}

impl Default for TextFitSolver {
    fn default() -> Self {
        Self {
            probe_size: 1_000.0,
            initial_bound: 10_000.0,
            tolerance: 10.0,
            max_iterations: 64,
        }
    }
}

impl TextFitSolver {
    /// Fits text measured by `measure` (size → bounds) into a ring of
    /// `radius` drawn with `stroke_width`.
    ///
    /// Returns `None` when the stroke leaves no inner space.
    pub fn solve(
        &self,
        mut measure: impl FnMut(f32) -> Vec2,
        radius: f32,
        stroke_width: f32,
        max_size: Option<f32>,
    ) -> Option<TextFit> {
        let available = radius - stroke_width;
        if available.is_nan() || available <= 0.0 {
            return None;
        }

        let mut last = self.initial_bound;
        let mut size = self.probe_size;
        let mut bounds;
        let mut iterations = 0;

        loop {
            bounds = measure(size);
            iterations += 1;

            let diff = corner_reach(bounds) - available;
            if diff > 0.0 {
                last = size;
                size /= 2.0;
            } else if diff < -self.tolerance {
                let current = size;
                size += (last - current).abs() / 2.0;
                last = current;
            } else {
                break;
            }

            if iterations >= self.max_iterations {
                log::warn!("text fit gave up after {iterations} iterations at size {size}");
                bounds = measure(size);
                break;
            }
        }

        log::trace!("text fit converged: size {size} after {iterations} iterations");

        if let Some(max) = max_size.filter(|m| *m > 0.0 && size > *m) {
            size = max;
            bounds = measure(size);
        }

        Some(TextFit { size, bounds, iterations })
    }
}

/// Distance from the ring center to the farthest of the two extreme corners
/// of a text box of `bounds` centered on it.
fn corner_reach(bounds: Vec2) -> f32 {
    let center = Vec2::zero();
    let bottom_left = Vec2::new(-bounds.x / 2.0, bounds.y / 2.0);
    let top_right = Vec2::new(bottom_left.x + bounds.x, bottom_left.y - bounds.y);
    center.distance(bottom_left).max(center.distance(top_right))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monospace-ish metrics: each glyph 0.6·size wide, caps 0.7·size tall.
    fn linear_metrics(text: &str) -> impl FnMut(f32) -> Vec2 + '_ {
        move |size| Vec2::new(0.6 * size * text.chars().count() as f32, 0.7 * size)
    }

    fn solve(text: &str, radius: f32, stroke: f32, max: Option<f32>) -> Option<TextFit> {
        TextFitSolver::default().solve(linear_metrics(text), radius, stroke, max)
    }

    #[test]
    fn short_label_converges_within_band() {
        let fit = solve("OK", 100.0, 25.0, None).unwrap();
        assert_eq!(fit.size, 93.75);
        assert_eq!(fit.iterations, 6);
        let diff = corner_reach(fit.bounds) - 75.0;
        assert!(diff <= 0.0 && diff >= -10.0, "diff {diff}");
        assert!(fit.iterations < 50);
    }

    #[test]
    fn undershoot_on_first_halving_stops_early() {
        let fit = solve("OK", 200.0, 20.0, None).unwrap();
        assert_eq!(fit.size, 250.0);
        assert_eq!(fit.iterations, 3);
    }

    #[test]
    fn max_size_clamps_and_remeasures() {
        let fit = solve("OK", 100.0, 25.0, Some(40.0)).unwrap();
        assert_eq!(fit.size, 40.0);
        assert_eq!(fit.bounds, Vec2::new(48.0, 28.0));
        assert_eq!(fit.iterations, 6);
    }

    #[test]
    fn max_size_above_fit_is_ignored() {
        let fit = solve("OK", 100.0, 25.0, Some(500.0)).unwrap();
        assert_eq!(fit.size, 93.75);
    }

    #[test]
    fn no_inner_space_yields_none() {
        assert!(solve("OK", 20.0, 25.0, None).is_none());
        assert!(solve("OK", 25.0, 25.0, None).is_none());
    }

    #[test]
    fn unmeasurable_text_stops_at_iteration_cap() {
        let solver = TextFitSolver { max_iterations: 12, ..TextFitSolver::default() };
        let fit = solver.solve(|_| Vec2::zero(), 100.0, 25.0, None).unwrap();
        assert_eq!(fit.iterations, 12);
        assert!(fit.size.is_finite());
    }

    #[test]
    fn corner_reach_is_half_diagonal() {
        assert_eq!(corner_reach(Vec2::new(6.0, 8.0)), 5.0);
    }
}
