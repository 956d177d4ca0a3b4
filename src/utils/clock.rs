use std::time::Duration;

/// Fixed-rate simulation clock.
///
/// Timestamps are monotonic offsets from an origin chosen by the host.
/// `last_step` moves only in whole `step_interval`s, so the simulation rate
/// stays locked to wall-clock time however irregular the frames are.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    last_step: Duration,
    step_interval: Duration,
}

impl SimulationClock {
    pub fn new(now: Duration, step_interval: Duration) -> Self {
        assert!(!step_interval.is_zero(), "step interval must be positive");
        Self {
            last_step: now,
            step_interval,
        }
    }

    pub fn last_step(&self) -> Duration {
        self.last_step
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    /// Consume one interval if a whole one has elapsed by `now`.
    ///
    /// Call in a loop until it returns `false` to catch up on delayed frames.
    pub fn tick(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last_step) < self.step_interval {
            return false;
        }
        self.last_step += self.step_interval;
        true
    }
}
