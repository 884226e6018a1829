//! Error types for card sources.

use thiserror::Error;

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors raised while acquiring a card pool.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The source could not deliver a pool: network failure, bad status,
    /// an API-level refusal, unreadable file, or malformed JSON.
    #[error("item source unavailable ({origin}): {reason}")]
    ItemSourceUnavailable {
        /// Which source failed (URL or file path).
        origin: String,
        /// What went wrong.
        reason: String,
    },

    /// The async runtime for a blocking draw could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl DeckError {
    /// Build an [`DeckError::ItemSourceUnavailable`].
    pub fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::ItemSourceUnavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this is an [`DeckError::ItemSourceUnavailable`].
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ItemSourceUnavailable { .. })
    }
}
