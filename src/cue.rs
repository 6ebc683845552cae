//! Sound cues requested by the core. Playback belongs to the host.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cue {
    /// One of several "correct" jingles, chosen at random per match.
    CorrectMatch { variant: usize },
    ErrorMatch,
    Click,
    Win,
    Loss,
    Intro,
}

impl Cue {
    pub fn name(self) -> &'static str {
        match self {
            Cue::CorrectMatch { .. } => "correct",
            Cue::ErrorMatch => "error",
            Cue::Click => "click",
            Cue::Win => "win",
            Cue::Loss => "loss",
            Cue::Intro => "intro",
        }
    }

    fn same_kind(self, other: Cue) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }
}

/// Cues raised during one tick; each kind is kept at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CueQueue {
    cues: Vec<Cue>,
}

impl CueQueue {
    pub fn push(&mut self, cue: Cue) {
        if !self.cues.iter().any(|c| c.same_kind(cue)) {
            self.cues.push(cue);
        }
    }

    pub fn contains(&self, cue: Cue) -> bool {
        self.cues.iter().any(|c| c.same_kind(cue))
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn take(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }
}
