//! Gameplay backdrop rotation: hold an image for a long dwell, dim it to
//! nothing, swap to the next image, brighten back to the base opacity.

use crate::clock::Countdown;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Dwell,
    Dimming,
    Brightening,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BackgroundView {
    pub index: usize,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundRotator {
    phase: Phase,
    dwell: Countdown,
    crossfade: Countdown,
    base_opacity: f32,
    count: usize,
    index: usize,
}

impl BackgroundRotator {
    pub fn new(dwell_ticks: u32, fade_ticks: u32, base_opacity: f32, count: usize) -> Self {
        Self {
            phase: Phase::Dwell,
            dwell: Countdown::new(dwell_ticks),
            crossfade: Countdown::new(fade_ticks),
            base_opacity: base_opacity.clamp(0.0, 1.0),
            count: count.max(1),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_crossfading(&self) -> bool {
        self.phase != Phase::Dwell
    }

    pub fn opacity(&self) -> f32 {
        let p = self.crossfade.progress();
        let value = match self.phase {
            Phase::Dwell => self.base_opacity,
            Phase::Dimming => self.base_opacity * (1.0 - p),
            Phase::Brightening => self.base_opacity * p,
        };
        value.clamp(0.0, 1.0)
    }

    pub fn view(&self) -> BackgroundView {
        BackgroundView { index: self.index, opacity: self.opacity() }
    }

    pub fn update(&mut self) {
        match self.phase {
            Phase::Dwell => {
                if self.dwell.tick() {
                    self.phase = Phase::Dimming;
                }
            }
            Phase::Dimming => {
                if self.crossfade.tick() {
                    self.index = (self.index + 1) % self.count;
                    self.phase = Phase::Brightening;
                }
            }
            Phase::Brightening => {
                if self.crossfade.tick() {
                    self.phase = Phase::Dwell;
                    self.dwell.reset();
                }
            }
        }
    }
}
