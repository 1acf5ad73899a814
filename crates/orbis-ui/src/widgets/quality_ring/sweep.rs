use std::time::Duration;

use orbis_engine::time::{Phase, Tween};

use super::segments::FULL_CIRCLE;

/// Lifecycle of the fill animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepState {
    Idle,
    Running,
    Completed,
}

/// What one [`SweepAnimator::advance`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepTick {
    /// Not running; nothing changed.
    Inactive,
    /// The angle moved and the sweep is still running.
    Progressed,
    /// The angle reached 360° during this call. Reported exactly once per run.
    Completed,
}

/// Drives `sweep_angle` linearly from 0° to 360° over a fixed duration.
///
/// The duration is captured by [`start`](Self::start); later configuration
/// changes do not rescale a run in progress.
#[derive(Debug, Clone)]
pub struct SweepAnimator {
    state: SweepState,
    angle: f32,
    timer: Tween,
}

impl SweepAnimator {
    pub fn new() -> Self {
        Self { state: SweepState::Idle, angle: 0.0, timer: Tween::new(Duration::ZERO) }
    }

    #[inline]
    pub fn state(&self) -> SweepState {
        self.state
    }

    /// Current sweep angle in degrees, [0, 360].
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state == SweepState::Completed
    }

    /// Restarts from 0° regardless of the current state.
    pub fn start(&mut self, duration: Duration) {
        self.timer = Tween::new(duration);
        self.angle = 0.0;
        self.state = SweepState::Running;
    }

    /// Stops ticking. The angle stays where it was.
    pub fn cancel(&mut self) {
        self.state = SweepState::Idle;
    }

    pub fn advance(&mut self, dt: Duration) -> SweepTick {
        if self.state != SweepState::Running {
            return SweepTick::Inactive;
        }
        match self.timer.advance(dt) {
            Phase::Running { fraction } => {
                self.angle = fraction * f32::from(FULL_CIRCLE);
                SweepTick::Progressed
            }
            Phase::Completed => {
                self.angle = f32::from(FULL_CIRCLE);
                self.state = SweepState::Completed;
                SweepTick::Completed
            }
        }
    }
}

impl Default for SweepAnimator {
    fn default() -> Self {
        Self::new()
    }
}
