//! The card-source seam shared by every front end.

use std::future::Future;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::card::Card;
use crate::config::DeckConfig;
use crate::error::DeckResult;
use crate::file::FileDeck;
use crate::http::HttpDeckSource;
use crate::local::LocalDeck;

/// Something that can produce an ordered pool of cards.
///
/// Each call draws a fresh pool; a reset in the ritual triggers a new draw.
pub trait DeckSource {
    /// Draw a fresh, ordered pool.
    fn draw(&self) -> impl Future<Output = DeckResult<Vec<Card>>> + Send;

    /// Short description for logs and status lines.
    fn describe(&self) -> String;
}

/// Any of the built-in sources, chosen at startup from command-line flags.
#[derive(Debug, Clone)]
pub enum AnyDeckSource {
    /// The remote shuffled-deck API.
    Remote(HttpDeckSource),
    /// A seeded offline shuffle.
    Local(LocalDeck),
    /// A saved draw on disk.
    File(FileDeck),
}

impl DeckSource for AnyDeckSource {
    async fn draw(&self) -> DeckResult<Vec<Card>> {
        match self {
            Self::Remote(source) => source.draw().await,
            Self::Local(source) => source.draw().await,
            Self::File(source) => source.draw().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Remote(source) => source.describe(),
            Self::Local(source) => source.describe(),
            Self::File(source) => source.describe(),
        }
    }
}

impl From<HttpDeckSource> for AnyDeckSource {
    fn from(source: HttpDeckSource) -> Self {
        Self::Remote(source)
    }
}

impl From<LocalDeck> for AnyDeckSource {
    fn from(source: LocalDeck) -> Self {
        Self::Local(source)
    }
}

impl From<FileDeck> for AnyDeckSource {
    fn from(source: FileDeck) -> Self {
        Self::File(source)
    }
}

/// Front-end flags that pick a source.
///
/// A deck file wins over `offline`, which wins over the remote API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOptions {
    /// Replay a saved draw from this file.
    pub deck_file: Option<PathBuf>,
    /// Shuffle locally instead of calling the API.
    pub offline: bool,
    /// Seed for the offline shuffle; derived from the clock when absent.
    pub seed: Option<u64>,
    /// Override the API base URL.
    pub api_url: Option<String>,
}

impl SourceOptions {
    /// Build the selected source.
    pub fn build(&self) -> DeckResult<AnyDeckSource> {
        if let Some(path) = &self.deck_file {
            return Ok(FileDeck::new(path.clone()).into());
        }
        if self.offline {
            let seed = self.seed.unwrap_or_else(clock_seed);
            return Ok(LocalDeck::new(seed).into());
        }
        let mut config = DeckConfig::default();
        if let Some(url) = &self.api_url {
            config = config.with_api_url(url.as_str());
        }
        Ok(HttpDeckSource::new(config)?.into())
    }

    /// Re-encode as command-line flags for a child process.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(path) = &self.deck_file {
            args.push("--deck-file".to_string());
            args.push(path.display().to_string());
        }
        if self.offline {
            args.push("--offline".to_string());
        }
        if let Some(seed) = self.seed {
            args.push("--seed".to_string());
            args.push(seed.to_string());
        }
        if let Some(url) = &self.api_url {
            args.push("--api-url".to_string());
            args.push(url.clone());
        }
        args
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}
