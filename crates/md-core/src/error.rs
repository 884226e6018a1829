//! Error types for the ritual engine.

use thiserror::Error;

use crate::phase::SessionPhase;

/// Result type for ritual operations.
pub type RitualResult<T> = Result<T, RitualError>;

/// Errors that can occur while driving a ritual session.
///
/// A resolution miss is not an error; see [`crate::Resolution::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RitualError {
    /// The operation is not valid in the current phase.
    #[error("cannot {action} while {actual}; expected {expected}")]
    InvalidPhase {
        /// What the caller tried to do.
        action: &'static str,
        /// The phase the operation requires.
        expected: SessionPhase,
        /// The phase the session is actually in.
        actual: SessionPhase,
    },

    /// An answer could not be understood.
    #[error("invalid answer: {0} (expected yes or no)")]
    InvalidAnswer(String),
}
