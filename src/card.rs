//! Card values. Plain `Copy` data, never mutated once built.

/// Lowest rank that counts as a face card (Jack).
pub const FIRST_FACE_RANK: u8 = 11;
pub const RANKS_PER_SUIT: u8 = 13;

/// Suits in sprite-sheet row order (also the deck build order within a rank).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    Diamonds,
    Hearts,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Clubs, Suit::Spades];

    pub fn ordinal(self) -> usize {
        match self {
            Suit::Diamonds => 0,
            Suit::Hearts => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Suit::Diamonds => "D",
            Suit::Hearts => "H",
            Suit::Clubs => "C",
            Suit::Spades => "S",
        }
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Returns `None` unless `rank` is in `1..=13`.
    pub fn new(rank: u8, suit: Suit) -> Option<Self> {
        (1..=RANKS_PER_SUIT)
            .contains(&rank)
            .then_some(Self { rank, suit })
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    /// Jack, Queen or King.
    pub fn is_face(self) -> bool {
        self.rank >= FIRST_FACE_RANK
    }

    /// `(column, row)` of this card on the card-face sprite sheet.
    pub fn sprite_cell(self) -> (usize, usize) {
        (usize::from(self.rank - 1), self.suit.ordinal())
    }

    pub fn label(self) -> String {
        let rank = match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        };
        format!("{rank}{}", self.suit.short())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
