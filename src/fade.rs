//! Black cross-fade between screens: fade out to full black, switch screens
//! on the peak tick, then fade back in. Only one fade runs at a time.

use crate::clock::Countdown;
use crate::screen::Screen;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadePhase {
    Idle,
    FadingOut { destination: Screen, timer: Countdown },
    FadingIn { timer: Countdown },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    phase: FadePhase,
    duration: u32,
}

impl Fade {
    /// `duration` is the length of each half, in ticks.
    pub fn new(duration: u32) -> Self {
        Self { phase: FadePhase::Idle, duration }
    }

    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, FadePhase::Idle)
    }

    /// Screen the running fade will switch to, while still fading out.
    pub fn pending_destination(&self) -> Option<Screen> {
        match self.phase {
            FadePhase::FadingOut { destination, .. } => Some(destination),
            _ => None,
        }
    }

    /// Starts fading out toward `destination`. Ignored (returns false) while
    /// another fade is running.
    pub fn request(&mut self, destination: Screen) -> bool {
        if self.is_active() {
            return false;
        }
        self.phase = FadePhase::FadingOut { destination, timer: Countdown::new(self.duration) };
        true
    }

    /// Advances one tick. Returns the destination on the tick the screen switches.
    pub fn update(&mut self) -> Option<Screen> {
        match &mut self.phase {
            FadePhase::Idle => None,
            FadePhase::FadingOut { destination, timer } => {
                if timer.tick() {
                    let destination = *destination;
                    self.phase = FadePhase::FadingIn { timer: Countdown::new(self.duration) };
                    Some(destination)
                } else {
                    None
                }
            }
            FadePhase::FadingIn { timer } => {
                if timer.tick() {
                    self.phase = FadePhase::Idle;
                }
                None
            }
        }
    }

    /// Black overlay opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        let value = match &self.phase {
            FadePhase::Idle => 0.0,
            FadePhase::FadingOut { timer, .. } => timer.progress(),
            FadePhase::FadingIn { timer } => 1.0 - timer.progress(),
        };
        value.clamp(0.0, 1.0)
    }
}
