//! Tick counters. Everything in the game is paced by whole ticks at a fixed
//! rate, so a countdown is just a decrement-to-zero with a reload value.

/// Counts down `duration` ticks and reports expiry once per cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
}

impl Countdown {
    /// `duration` is clamped to at least one tick.
    pub fn new(duration: u32) -> Self {
        let duration = duration.max(1);
        Self { duration, remaining: duration }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Ticks already spent in the current cycle.
    pub fn elapsed(&self) -> u32 {
        self.duration - self.remaining
    }

    /// Fraction of the cycle elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.elapsed() as f32 / self.duration as f32).clamp(0.0, 1.0)
    }

    /// Advances one tick. Returns true on the tick the counter hits zero and
    /// reloads for the next cycle.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = self.duration;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.duration;
    }
}
