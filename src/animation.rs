//! Decorative animations after a match. The definitions play in a fixed
//! round-robin order and never overlap: a match that lands while one is
//! still running simply gets no animation of its own.

use crate::clock::Countdown;
use crate::config::AnimationDef;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnimationView {
    pub index: usize,
    pub frame: u32,
    pub playing: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationSequencer {
    defs: Vec<AnimationDef>,
    index: usize,
    playing: bool,
    frame: u32,
    frame_timer: Countdown,
}

impl AnimationSequencer {
    pub fn new(defs: Vec<AnimationDef>) -> Self {
        let first = defs.first().map_or(1, |d| d.ticks_per_frame);
        Self { defs, index: 0, playing: false, frame: 0, frame_timer: Countdown::new(first) }
    }

    pub fn sequence_index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_frame(&self) -> u32 {
        self.frame
    }

    pub fn current_def(&self) -> Option<&AnimationDef> {
        self.defs.get(self.index)
    }

    pub fn view(&self) -> AnimationView {
        AnimationView { index: self.index, frame: self.frame, playing: self.playing }
    }

    /// Starts the animation at the current sequence index from frame 0.
    /// No-op (returns false) while one is already playing.
    pub fn start(&mut self) -> bool {
        if self.playing {
            return false;
        }
        let Some(def) = self.defs.get(self.index) else {
            return false;
        };
        self.frame_timer = Countdown::new(def.ticks_per_frame);
        self.frame = 0;
        self.playing = true;
        tracing::debug!(index = self.index, "animation started");
        true
    }

    /// Advances playback by one tick. Returns true on the tick playback ends.
    pub fn update(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let Some(def) = self.defs.get(self.index) else {
            self.playing = false;
            return false;
        };
        if self.frame + 1 < def.frame_count {
            if self.frame_timer.tick() {
                self.frame += 1;
            }
            return false;
        }
        self.playing = false;
        tracing::debug!(index = self.index, "animation finished");
        self.index = (self.index + 1) % self.defs.len();
        true
    }

    /// Back to the first definition, nothing playing.
    pub fn reset(&mut self) {
        self.index = 0;
        self.playing = false;
        self.frame = 0;
    }
}
