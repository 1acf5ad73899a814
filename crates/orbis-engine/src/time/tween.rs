use std::time::Duration;

/// Phase of a timed interpolation.
///
/// `Running` carries the linear fraction in [0, 1). Zero-duration tweens
/// satisfy `0 >= 0` and report `Completed` immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Running { fraction: f32 },
    Completed,
}

impl Phase {
    /// Linear fraction, `1.0` once completed.
    #[inline]
    pub fn fraction(self) -> f32 {
        match self {
            Phase::Running { fraction } => fraction,
            Phase::Completed => 1.0,
        }
    }

    #[inline]
    pub fn is_completed(self) -> bool {
        matches!(self, Phase::Completed)
    }
}

/// Elapsed-time accumulator for one interpolation.
///
/// The duration is fixed at construction; hosts feed frame deltas through
/// [`advance`](Self::advance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tween {
    elapsed: Duration,
    duration: Duration,
}

impl Tween {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self { elapsed: Duration::ZERO, duration }
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Adds `delta` to the elapsed time and returns the resulting phase.
    pub fn advance(&mut self, delta: Duration) -> Phase {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
        self.phase()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.elapsed >= self.duration {
            Phase::Completed
        } else {
            // duration > 0 here: elapsed < duration
            let f = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
            Phase::Running { fraction: (f as f32).clamp(0.0, 1.0) }
        }
    }
}
