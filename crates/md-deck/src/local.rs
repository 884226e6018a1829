//! Offline deck: a standard 52-card deck shuffled with a seeded RNG.

use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use md_core::Suit;

use crate::card::Card;
use crate::error::DeckResult;
use crate::source::DeckSource;

/// Ranks in deck order as `(code, value)`; the API codes ten as `0`.
const RANKS: [(&str, &str); 13] = [
    ("A", "ACE"),
    ("2", "2"),
    ("3", "3"),
    ("4", "4"),
    ("5", "5"),
    ("6", "6"),
    ("7", "7"),
    ("8", "8"),
    ("9", "9"),
    ("0", "10"),
    ("J", "JACK"),
    ("Q", "QUEEN"),
    ("K", "KING"),
];

/// Image host used by the deck API for card faces.
const IMAGE_BASE: &str = "https://deckofcardsapi.com/static/img";

/// The 52 cards of a fresh deck, suit by suit.
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|suit| {
            RANKS.iter().map(move |(rank, value)| {
                let code = format!("{rank}{}", suit.code());
                Card {
                    image: format!("{IMAGE_BASE}/{code}.png"),
                    code,
                    value: (*value).to_string(),
                    suit: suit.to_string(),
                }
            })
        })
        .collect()
}

/// Deals shuffled decks without the network.
///
/// Successive draws continue the same seeded RNG stream, so a reset deals a
/// different order while whole runs stay reproducible for a given seed.
#[derive(Debug)]
pub struct LocalDeck {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl LocalDeck {
    /// Create a deck dealer with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The seed this dealer started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn shuffled(&self) -> Vec<Card> {
        let mut cards = standard_deck();
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        cards.shuffle(&mut *rng);
        cards
    }
}

impl Clone for LocalDeck {
    /// A clone restarts from the original seed.
    fn clone(&self) -> Self {
        Self::new(self.seed)
    }
}

impl DeckSource for LocalDeck {
    async fn draw(&self) -> DeckResult<Vec<Card>> {
        Ok(self.shuffled())
    }

    fn describe(&self) -> String {
        format!("offline deck (seed {})", self.seed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn standard_deck_is_complete() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);
        let codes: HashSet<&str> = deck.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes.len(), 52);
        assert!(codes.contains("0H"));
        assert_eq!(deck[0].label(), "ACE of SPADES");
        assert_eq!(deck[0].image, "https://deckofcardsapi.com/static/img/AS.png");
    }

    #[tokio::test]
    async fn same_seed_same_order() {
        let a = LocalDeck::new(7).draw().await.unwrap();
        let b = LocalDeck::new(7).draw().await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn successive_draws_differ() {
        let deck = LocalDeck::new(7);
        let first = deck.draw().await.unwrap();
        let second = deck.draw().await.unwrap();
        assert_eq!(first.len(), 52);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn clone_restarts_stream() {
        let deck = LocalDeck::new(11);
        let first = deck.draw().await.unwrap();
        let again = deck.clone().draw().await.unwrap();
        assert_eq!(first, again);
    }
}
