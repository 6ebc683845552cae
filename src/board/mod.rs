//! The 2×6 tableau and the Elevens move rules.
//!
//! Slots are numbered row-major: 0..=5 is the top row, 6..=11 the bottom row.
//! Each slot shows one card and remembers how many cards have been dealt into
//! it (`pile_depth`). A face card can be exchanged with the deck only while it
//! is the first card of its pile; once a match has refilled the slot, a face
//! card landing there is stuck for the rest of the game.

pub mod layout;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RuleError;

pub const ROWS: usize = 2;
pub const COLUMNS: usize = 6;
pub const SLOT_COUNT: usize = ROWS * COLUMNS;

/// Rank pairs that sum to eleven, high card first.
pub const ELEVEN_PAIRS: [(u8, u8); 5] = [(10, 1), (9, 2), (8, 3), (7, 4), (6, 5)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub card: Card,
    pub pile_depth: u32,
}

/// Result of a successful `resolve_match`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Both slots were refilled from the deck.
    Refilled,
    /// The deck held exactly the last two cards: the game is won and the
    /// board is left as it was.
    DeckExhausted,
}

pub fn row_of(index: usize) -> usize {
    index / COLUMNS
}

pub fn column_of(index: usize) -> usize {
    index % COLUMNS
}

pub fn slot_index(row: usize, column: usize) -> usize {
    row * COLUMNS + column
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    slots: [Slot; SLOT_COUNT],
}

impl Board {
    /// Deals one card per slot from the deck front, in slot order.
    pub fn deal(deck: &mut Deck) -> Result<Self, RuleError> {
        if deck.len() < SLOT_COUNT {
            return Err(RuleError::EmptyDeck);
        }
        let mut dealt = Vec::with_capacity(SLOT_COUNT);
        for _ in 0..SLOT_COUNT {
            dealt.push(Slot { card: deck.draw_front()?, pile_depth: 1 });
        }
        let slots: [Slot; SLOT_COUNT] = dealt.try_into().map_err(|_| RuleError::EmptyDeck)?;
        Ok(Self { slots })
    }

    /// Builds a board from explicit slots. Pile depths below one are raised to one.
    pub fn from_slots(slots: [Slot; SLOT_COUNT]) -> Self {
        Self {
            slots: slots.map(|s| Slot { pile_depth: s.pile_depth.max(1), ..s }),
        }
    }

    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Result<&Slot, RuleError> {
        self.slots.get(index).ok_or(RuleError::SlotOutOfRange { index })
    }

    pub fn card(&self, index: usize) -> Result<Card, RuleError> {
        self.slot(index).map(|s| s.card)
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().map(|s| s.card)
    }

    /// Untouched face card: the slot has never been refilled and shows J/Q/K.
    pub fn is_face_swap_eligible(&self, index: usize) -> bool {
        self.slots
            .get(index)
            .is_some_and(|s| s.pile_depth == 1 && s.card.is_face())
    }

    /// Face card buried under at least one match; drawn with a warning outline.
    pub fn is_blocked_face(&self, index: usize) -> bool {
        self.slots
            .get(index)
            .is_some_and(|s| s.pile_depth > 1 && s.card.is_face())
    }

    /// Two distinct slots whose ranks add up to eleven. Face ranks (11–13)
    /// can never take part because the smallest partner rank is one.
    pub fn is_eleven_pair(&self, a: usize, b: usize) -> bool {
        if a == b {
            return false;
        }
        match (self.slots.get(a), self.slots.get(b)) {
            (Some(x), Some(y)) => x.card.rank() + y.card.rank() == 11,
            _ => false,
        }
    }

    /// Sends an untouched face card to the back of the deck and replaces it
    /// with the deck's front card. Pile depth is unchanged.
    pub fn swap_face(&mut self, index: usize, deck: &mut Deck) -> Result<(), RuleError> {
        if index >= SLOT_COUNT {
            return Err(RuleError::SlotOutOfRange { index });
        }
        if !self.is_face_swap_eligible(index) {
            return Err(RuleError::NotFaceSwapEligible { slot: index });
        }
        let slot = &mut self.slots[index];
        deck.append_back(slot.card);
        slot.card = deck.draw_front()?;
        Ok(())
    }

    /// Removes an eleven pair. `a` takes the first drawn card and `b` the second.
    pub fn resolve_match(
        &mut self,
        a: usize,
        b: usize,
        deck: &mut Deck,
    ) -> Result<MatchOutcome, RuleError> {
        for index in [a, b] {
            if index >= SLOT_COUNT {
                return Err(RuleError::SlotOutOfRange { index });
            }
        }
        if !self.is_eleven_pair(a, b) {
            return Err(RuleError::NotElevenPair { a, b });
        }
        match deck.len() {
            2 => Ok(MatchOutcome::DeckExhausted),
            0 | 1 => Err(RuleError::EmptyDeck),
            _ => {
                let first = deck.draw_front()?;
                let second = deck.draw_front()?;
                for (index, card) in [(a, first), (b, second)] {
                    let slot = &mut self.slots[index];
                    slot.card = card;
                    slot.pile_depth += 1;
                }
                Ok(MatchOutcome::Refilled)
            }
        }
    }

    /// Any legal move left: an untouched face card or a pair of ranks summing to eleven.
    pub fn has_moves(&self) -> bool {
        if (0..SLOT_COUNT).any(|i| self.is_face_swap_eligible(i)) {
            return true;
        }
        let mut present = [false; 14];
        for slot in &self.slots {
            present[usize::from(slot.card.rank())] = true;
        }
        ELEVEN_PAIRS
            .iter()
            .any(|&(hi, lo)| present[usize::from(hi)] && present[usize::from(lo)])
    }

    /// True when no face swap and no eleven pair is available.
    pub fn check_loss_condition(&self) -> bool {
        !self.has_moves()
    }
}
