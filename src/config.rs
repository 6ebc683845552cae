//! Timing and content constants. Every duration is expressed in ticks and
//! derived from `frame_rate` unless overridden.

use crate::board::SLOT_COUNT;
use crate::error::ConfigError;

pub const DEFAULT_FRAME_RATE: u32 = 60;

/// One decorative animation played after a successful match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationDef {
    pub frame_count: u32,
    pub ticks_per_frame: u32,
}

impl AnimationDef {
    pub const fn new(frame_count: u32, ticks_per_frame: u32) -> Self {
        Self { frame_count, ticks_per_frame }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub frame_rate: u32,
    /// Length of each half of a screen transition.
    pub fade_ticks: u32,
    pub intro_ticks: u32,
    pub hidden_ticks: u32,
    pub hidden_count: usize,
    pub background_dwell_ticks: u32,
    pub background_fade_ticks: u32,
    pub background_base_opacity: f32,
    pub background_count: usize,
    pub help_pages: usize,
    pub correct_cue_variants: usize,
    pub animations: Vec<AnimationDef>,
    /// Fixed RNG seed; `None` seeds from the environment.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_frame_rate(frame_rate: u32) -> Self {
        Self {
            frame_rate,
            fade_ticks: frame_rate,
            intro_ticks: frame_rate,
            hidden_ticks: frame_rate * 2,
            hidden_count: 6,
            background_dwell_ticks: frame_rate * 10,
            background_fade_ticks: frame_rate / 2,
            background_base_opacity: 0.6,
            background_count: 5,
            help_pages: 4,
            correct_cue_variants: 3,
            animations: vec![
                AnimationDef::new(61, 6),
                AnimationDef::new(31, 4),
                AnimationDef::new(48, 4),
            ],
            seed: None,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("frame_rate", self.frame_rate as usize),
            ("fade_ticks", self.fade_ticks as usize),
            ("intro_ticks", self.intro_ticks as usize),
            ("hidden_ticks", self.hidden_ticks as usize),
            ("background_dwell_ticks", self.background_dwell_ticks as usize),
            ("background_fade_ticks", self.background_fade_ticks as usize),
            ("background_count", self.background_count),
            ("help_pages", self.help_pages),
            ("correct_cue_variants", self.correct_cue_variants),
        ];
        if let Some(&(field, _)) = durations.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::ZeroDuration { field });
        }
        if self.hidden_count > SLOT_COUNT {
            return Err(ConfigError::TooManyHidden { count: self.hidden_count, slots: SLOT_COUNT });
        }
        if !(0.0..=1.0).contains(&self.background_base_opacity) {
            return Err(ConfigError::Opacity(self.background_base_opacity));
        }
        if self.animations.is_empty() {
            return Err(ConfigError::NoAnimations);
        }
        for (index, def) in self.animations.iter().enumerate() {
            if def.frame_count == 0 {
                return Err(ConfigError::EmptyAnimation { index });
            }
            if def.ticks_per_frame == 0 {
                return Err(ConfigError::ZeroDuration { field: "ticks_per_frame" });
            }
        }
        Ok(())
    }

    /// Parses a (possibly partial) JSON config; missing fields take defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_frame_rate(DEFAULT_FRAME_RATE)
    }
}
