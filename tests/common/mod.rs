//! Shared helpers for the native integration tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use elevens::board::layout::{self, Button};
use elevens::board::{Board, SLOT_COUNT, Slot};
use elevens::input::{Point, Rect};
use elevens::{Card, Cue, Deck, Game, GameConfig, GameSession, InputFrame, Screen, Suit};
use tracing_subscriber::{EnvFilter, fmt};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn card(rank: u8) -> Card {
    Card::new(rank, Suit::Spades).unwrap()
}

pub fn idle() -> InputFrame {
    InputFrame::new(0.0, 0.0, false)
}

pub fn centre(rect: Rect) -> Point {
    Point::new((rect.x + rect.w / 2) as f32, (rect.y + rect.h / 2) as f32)
}

pub fn slot_centre(index: usize) -> Point {
    centre(layout::slot_rect(index))
}

/// Presses then releases at `p`, returning the cues of both ticks.
pub fn click(game: &mut Game, p: Point) -> Vec<Cue> {
    let mut cues = game.tick(InputFrame { cursor: p, left_down: true });
    cues.extend(game.tick(InputFrame { cursor: p, left_down: false }));
    cues
}

pub fn settle(game: &mut Game) {
    while game.fade().is_active() {
        game.tick(idle());
    }
}

/// Seeded game already sitting on a settled gameplay screen.
pub fn game_in_play(seed: u64) -> Game {
    init_logging();
    let mut game = Game::new(GameConfig::seeded(seed)).unwrap();
    while game.screen() != Screen::Menu || game.fade().is_active() {
        game.tick(idle());
    }
    click(&mut game, centre(Button::Start.rect()));
    while game.screen() != Screen::Gameplay {
        game.tick(idle());
    }
    settle(&mut game);
    game
}

/// Session with the given slot ranks (all at `depth`) and deck ranks.
pub fn scripted(ranks: [u8; SLOT_COUNT], depth: u32, deck: &[u8]) -> GameSession {
    let board = Board::from_slots(ranks.map(|r| Slot { card: card(r), pile_depth: depth }));
    GameSession::from_parts(Deck::from_cards(deck.iter().map(|&r| card(r))), board)
}
