//! Card sources for Mystic Deck.
//!
//! The ritual needs an ordered pool of cards. This crate fetches one from the
//! public shuffled-deck API, builds one offline from a seeded shuffle, or
//! replays a saved draw from disk. All sources report failure as a single
//! distinguishable [`DeckError::ItemSourceUnavailable`] so front ends never
//! run on silently partial state.

pub mod blocking;
pub mod card;
pub mod config;
pub mod error;
pub mod file;
pub mod http;
pub mod local;
pub mod pool;
pub mod source;

pub use card::{Card, DrawResponse};
pub use config::DeckConfig;
pub use error::{DeckError, DeckResult};
pub use file::FileDeck;
pub use http::HttpDeckSource;
pub use local::LocalDeck;
pub use pool::draw_pool;
pub use source::{AnyDeckSource, DeckSource, SourceOptions};
