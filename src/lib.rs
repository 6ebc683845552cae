//! Elevens core crate.
//!
//! Twelve cards are dealt face up in two rows of six. Pairs of number cards
//! whose ranks sum to eleven are covered from the deck, and an untouched face
//! card can be sent back to the deck once. The player wins by emptying the
//! deck and loses when no move remains.
//!
//! Everything except `web` is deterministic and target independent: the
//! [`Game`] controller is driven one tick at a time with an [`InputFrame`]
//! and reports sound [`Cue`]s plus a [`Snapshot`] for drawing. The browser
//! entry point `start_game()` wires it to a canvas.

use wasm_bindgen::prelude::*;

pub mod animation;
pub mod background;
pub mod board;
pub mod card;
pub mod clock;
pub mod config;
pub mod cue;
pub mod deck;
pub mod error;
pub mod fade;
pub mod hidden;
pub mod input;
pub mod screen;
pub mod session;
pub mod snapshot;
mod web;

pub use board::{Board, MatchOutcome};
pub use card::{Card, Suit};
pub use config::GameConfig;
pub use cue::Cue;
pub use deck::Deck;
pub use error::{ConfigError, RuleError};
pub use input::InputFrame;
pub use screen::{Game, Screen};
pub use session::{ClickOutcome, GameSession};
pub use snapshot::Snapshot;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())
}

/// Starts the game with a fixed shuffle seed, for reproducible sessions.
#[wasm_bindgen]
pub fn start_game_seeded(seed: u64) -> Result<(), JsValue> {
    web::start(GameConfig::seeded(seed))
}

/// Names of the sound cues raised since the last call, comma separated.
#[wasm_bindgen]
pub fn drain_cues() -> String {
    web::drain_cues()
}
