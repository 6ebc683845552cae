//! Error types for rule preconditions and configuration.

use thiserror::Error;

/// Precondition violations in the rule engine. The session never triggers
/// these itself; they surface only when a caller drives `Board`/`Deck`
/// directly with a move the rules do not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
    #[error("slot index {index} is outside the 12-slot board")]
    SlotOutOfRange { index: usize },
    #[error("slot {slot} does not hold an untouched face card")]
    NotFaceSwapEligible { slot: usize },
    #[error("slots {a} and {b} do not form an eleven pair")]
    NotElevenPair { a: usize, b: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
    #[error("at least one animation definition is required")]
    NoAnimations,
    #[error("animation {index} needs at least one frame")]
    EmptyAnimation { index: usize },
    #[error("hidden_count {count} exceeds the {slots} board slots")]
    TooManyHidden { count: usize, slots: usize },
    #[error("background_base_opacity {0} is outside 0..=1")]
    Opacity(f32),
    #[cfg(feature = "serde_json")]
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
