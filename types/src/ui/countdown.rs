use std::time::Duration;

/// Time left on a short-lived UI effect (key flash, notification).
///
/// Advanced by frame deltas; never reads the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: Duration,
}

impl Countdown {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            remaining: duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.remaining = self.remaining.saturating_sub(delta);
    }

    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining.is_zero()
    }
}
