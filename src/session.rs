//! One game of Elevens: deck, board, the current selection and the sticky
//! win/loss flags. A session is rebuilt from scratch for every new game.

use rand::Rng;

use crate::board::{Board, MatchOutcome, SLOT_COUNT};
use crate::deck::Deck;
use crate::error::RuleError;

/// What a click on a board slot did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Game already over, or the index is not a slot.
    Ignored,
    /// An untouched face card went back to the deck.
    Swapped { slot: usize },
    /// A number card became the first half of a pair.
    Selected { slot: usize },
    /// A face card that can no longer be swapped; nothing happens.
    Inert { slot: usize },
    /// The second click completed an eleven pair.
    Matched { first: usize, second: usize, outcome: MatchOutcome },
    /// The second click did not complete a pair; selection cleared.
    Mismatch { first: usize, second: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    deck: Deck,
    board: Board,
    selected: Option<usize>,
    player_won: bool,
    player_lost: bool,
}

impl GameSession {
    /// Shuffles a fresh 52-card deck and deals the board.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::shuffled(rng);
        match Board::deal(&mut deck) {
            Ok(board) => Self::from_parts(deck, board),
            // a full deck always covers the 12 slots
            Err(err) => unreachable!("dealing from a full deck failed: {err}"),
        }
    }

    /// Deals from `deck` in its current order (front card to slot 0).
    pub fn from_deck(mut deck: Deck) -> Result<Self, RuleError> {
        let board = Board::deal(&mut deck)?;
        Ok(Self::from_parts(deck, board))
    }

    /// Starts from an arbitrary position, e.g. a late-game board in tests.
    pub fn from_parts(deck: Deck, board: Board) -> Self {
        Self { deck, board, selected: None, player_won: false, player_lost: false }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn player_won(&self) -> bool {
        self.player_won
    }

    pub fn player_lost(&self) -> bool {
        self.player_lost
    }

    pub fn is_over(&self) -> bool {
        self.player_won || self.player_lost
    }

    /// Applies one click on `slot` according to the turn rules.
    pub fn click_slot(&mut self, slot: usize) -> ClickOutcome {
        if self.is_over() || slot >= SLOT_COUNT {
            return ClickOutcome::Ignored;
        }
        match self.selected.take() {
            None => self.first_click(slot),
            Some(first) => self.second_click(first, slot),
        }
    }

    fn first_click(&mut self, slot: usize) -> ClickOutcome {
        if self.board.is_face_swap_eligible(slot) {
            if let Err(err) = self.board.swap_face(slot, &mut self.deck) {
                return reject(err);
            }
            tracing::debug!(slot, deck = self.deck.len(), "face card swapped");
            return ClickOutcome::Swapped { slot };
        }
        let is_face = self.board.card(slot).map(|c| c.is_face()).unwrap_or(true);
        if is_face {
            ClickOutcome::Inert { slot }
        } else {
            self.selected = Some(slot);
            ClickOutcome::Selected { slot }
        }
    }

    fn second_click(&mut self, first: usize, second: usize) -> ClickOutcome {
        if !self.board.is_eleven_pair(first, second) {
            return ClickOutcome::Mismatch { first, second };
        }
        let outcome = match self.board.resolve_match(first, second, &mut self.deck) {
            Ok(outcome) => outcome,
            Err(err) => return reject(err),
        };
        if outcome == MatchOutcome::DeckExhausted {
            self.player_won = true;
            tracing::info!("deck exhausted, player won");
        } else {
            tracing::debug!(first, second, deck = self.deck.len(), "eleven pair removed");
        }
        ClickOutcome::Matched { first, second, outcome }
    }

    /// Marks the game lost the first time no move remains. Returns true only
    /// on that transition.
    pub fn check_loss(&mut self) -> bool {
        if self.is_over() || !self.board.check_loss_condition() {
            return false;
        }
        self.player_lost = true;
        tracing::info!(deck = self.deck.len(), "no moves left, player lost");
        true
    }
}

// Only reachable if the board and the dispatch above disagree.
fn reject(err: RuleError) -> ClickOutcome {
    tracing::error!(%err, "rule engine rejected a pre-checked move");
    if cfg!(debug_assertions) {
        panic!("rule engine rejected a pre-checked move: {err}");
    }
    ClickOutcome::Ignored
}
