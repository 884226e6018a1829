//! Replaying a saved draw from disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::card::{Card, DrawResponse};
use crate::error::{DeckError, DeckResult};
use crate::source::DeckSource;

/// Reads a draw saved in the deck API's JSON shape (see `mystic deck --json`).
#[derive(Debug, Clone)]
pub struct FileDeck {
    path: PathBuf,
}

impl FileDeck {
    /// Create a source that reads from `path` on every draw.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeckSource for FileDeck {
    async fn draw(&self) -> DeckResult<Vec<Card>> {
        let origin = self.path.display().to_string();
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DeckError::unavailable(&origin, e))?;
        let body: DrawResponse =
            serde_json::from_str(&text).map_err(|e| DeckError::unavailable(&origin, e))?;
        if !body.success {
            return Err(DeckError::unavailable(
                origin,
                body.error
                    .unwrap_or_else(|| "saved draw is marked unsuccessful".to_string()),
            ));
        }
        debug!(path = %self.path.display(), cards = body.cards.len(), "saved draw loaded");
        Ok(body.cards)
    }

    fn describe(&self) -> String {
        format!("saved draw {}", self.path.display())
    }
}
