//! Draw pile. Front is the next card to draw; swapped face cards go to the back.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, RANKS_PER_SUIT, Suit};
use crate::error::RuleError;

pub const FULL_DECK_SIZE: usize = 52;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// All 52 cards, ordered by rank and then by suit (D, H, C, S).
    pub fn build() -> Self {
        let cards = (1..=RANKS_PER_SUIT)
            .flat_map(|rank| Suit::ALL.into_iter().filter_map(move |suit| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Builds a deck in exactly the given order, front first. Used for scripted deals.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self { cards: cards.into_iter().collect() }
    }

    /// A freshly built deck, shuffled with `rng`.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Uniform in-place Fisher–Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    pub fn draw_front(&mut self) -> Result<Card, RuleError> {
        self.cards.pop_front().ok_or(RuleError::EmptyDeck)
    }

    pub fn append_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn front(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    #[test]
    fn build_yields_52_distinct_cards_in_rank_then_suit_order() {
        let deck = Deck::build();
        assert_eq!(deck.len(), FULL_DECK_SIZE);
        let unique: HashSet<Card> = deck.iter().collect();
        assert_eq!(unique.len(), FULL_DECK_SIZE);
        let first: Vec<String> = deck.iter().take(5).map(|c| c.label()).collect();
        assert_eq!(first, ["AD", "AH", "AC", "AS", "2D"]);
    }

    #[test]
    fn seeded_shuffle_is_reproducible_and_a_permutation() {
        let a = Deck::shuffled(&mut SmallRng::seed_from_u64(7));
        let b = Deck::shuffled(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_ne!(a, Deck::build());
        let unique: HashSet<Card> = a.iter().collect();
        assert_eq!(unique.len(), FULL_DECK_SIZE);
    }

    #[test]
    fn draw_and_append_respect_order() {
        let mut deck = Deck::build();
        let first = deck.draw_front().unwrap();
        assert_eq!(first.label(), "AD");
        deck.append_back(first);
        assert_eq!(deck.len(), FULL_DECK_SIZE);
        assert_eq!(deck.iter().last(), Some(first));
        assert_eq!(deck.front().map(|c| c.label()), Some("AH".to_string()));
    }

    #[test]
    fn draw_from_empty_deck_fails() {
        let mut deck = Deck::from_cards([]);
        assert_eq!(deck.draw_front(), Err(RuleError::EmptyDeck));
    }
}
