//! "Hidden mode": every couple of seconds a fresh random set of slots is
//! drawn face down. Display only; rules and clicks ignore it.

use rand::Rng;

use crate::board::SLOT_COUNT;
use crate::clock::Countdown;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenMode {
    enabled: bool,
    hidden: Vec<usize>,
    count: usize,
    timer: Countdown,
}

impl HiddenMode {
    pub fn new(interval_ticks: u32, count: usize) -> Self {
        Self {
            enabled: false,
            hidden: Vec::new(),
            count: count.min(SLOT_COUNT),
            timer: Countdown::new(interval_ticks),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn ticks_until_reshuffle(&self) -> u32 {
        self.timer.remaining()
    }

    /// Current set in draw order. Kept while disabled so re-enabling resumes it.
    pub fn hidden_slots(&self) -> &[usize] {
        &self.hidden
    }

    /// Whether the slot should be drawn face down right now.
    pub fn is_hidden(&self, slot: usize) -> bool {
        self.enabled && self.hidden.contains(&slot)
    }

    /// Counts down while enabled; on expiry draws a new set. Returns true on reshuffle.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.enabled || !self.timer.tick() {
            return false;
        }
        self.reshuffle(rng);
        true
    }

    /// Uniform draws with duplicates rejected until `count` distinct slots are picked.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut picked = Vec::with_capacity(self.count);
        while picked.len() < self.count {
            let slot = rng.random_range(0..SLOT_COUNT);
            if !picked.contains(&slot) {
                picked.push(slot);
            }
        }
        tracing::debug!(?picked, "hidden slots reshuffled");
        self.hidden = picked;
    }
}
