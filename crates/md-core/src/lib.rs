//! Ritual engine for Mystic Deck.
//!
//! A card-fortune ritual built on the "think of a number" trick: each card in
//! the working pool gets a small integer identifier, and five yes/no questions
//! ("is your card in this group?") spell out that identifier one bit at a
//! time. After the last answer the accumulated bitmask is looked up directly,
//! with no search.
//!
//! The engine is front-end agnostic. Presentation layers own a
//! [`RitualEngine`], forward the four user triggers (start, yes, no, reset) to
//! it, and react to the [`SessionPhase`] it reports.

/// Session configuration (question count, pool size).
pub mod config;
/// The ritual state machine.
pub mod engine;
/// Error types used throughout the crate.
pub mod error;
/// Fate messages keyed by card suit.
pub mod fate;
/// Items and their bit-pattern identifiers.
pub mod item;
/// Session phases and answers.
pub mod phase;

pub use config::RitualConfig;
pub use engine::{Resolution, RitualEngine};
pub use error::{RitualError, RitualResult};
pub use fate::{Suit, fate_message};
pub use item::{Item, ItemIdentifier};
pub use phase::{Answer, SessionPhase};
