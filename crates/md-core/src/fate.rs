//! Fate messages keyed by card suit.
//!
//! The revealed card's suit selects one of four fixed readings. Any other
//! category (jokers, unknown decks) gets the generic reading.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Shown before a card has been revealed, and again after a reset.
pub const AWAITING_MESSAGE: &str = "The secret of your card awaits...";

/// Shown when the answers do not spell any card in the pool.
pub const NOT_FOUND_MESSAGE: &str = "Your card could not be found! Try the ritual again.";

/// Reading for cards whose category is not a known suit.
pub const UNKNOWN_FATE_MESSAGE: &str = "This card holds a secret that has not yet been revealed...";

/// One of the four French suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    /// ♥
    Hearts,
    /// ♦
    Diamonds,
    /// ♣
    Clubs,
    /// ♠
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    /// Parse a suit name (case-insensitive, singular or plural).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "HEARTS" | "HEART" => Some(Self::Hearts),
            "DIAMONDS" | "DIAMOND" => Some(Self::Diamonds),
            "CLUBS" | "CLUB" => Some(Self::Clubs),
            "SPADES" | "SPADE" => Some(Self::Spades),
            _ => None,
        }
    }

    /// Single-letter code used by card codes (`H`, `D`, `C`, `S`).
    pub fn code(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    /// Unicode suit symbol.
    pub fn glyph(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Whether the suit is printed in red.
    pub fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }

    /// The fixed reading for this suit.
    pub fn fate(self) -> &'static str {
        match self {
            Self::Hearts => "This card speaks of the love and kindness within your heart!",
            Self::Diamonds => "This card foretells wealth and prosperity along your path!",
            Self::Clubs => "This card is a symbol of creativity and growth in your soul!",
            Self::Spades => "This card tells of your wisdom and inner strength!",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hearts => write!(f, "HEARTS"),
            Self::Diamonds => write!(f, "DIAMONDS"),
            Self::Clubs => write!(f, "CLUBS"),
            Self::Spades => write!(f, "SPADES"),
        }
    }
}

/// Reading for a revealed card, keyed by its category attribute.
pub fn fate_message(category: &str) -> &'static str {
    Suit::parse(category).map_or(UNKNOWN_FATE_MESSAGE, Suit::fate)
}
