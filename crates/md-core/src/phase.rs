//! Session phases and yes/no answers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RitualError, RitualResult};

/// The visible step of a ritual session.
///
/// Front ends show the selection, questioning, or reveal step according to the
/// phase the engine reports; the engine never touches presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// The pool is laid out; the user picks a card in their mind.
    Selecting,
    /// Questions are being asked.
    Questioning,
    /// All questions answered; the card can be resolved.
    Revealing,
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selecting => write!(f, "selecting"),
            Self::Questioning => write!(f, "questioning"),
            Self::Revealing => write!(f, "revealing"),
        }
    }
}

/// A user's answer to "is your card in this group?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    /// The card is in the group.
    Yes,
    /// The card is not in the group.
    No,
}

impl Answer {
    /// Parse `y`, `yes`, `n`, or `no` (case-insensitive, surrounding space ignored).
    pub fn parse(s: &str) -> RitualResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" => Ok(Self::Yes),
            "n" | "no" => Ok(Self::No),
            _ => Err(RitualError::InvalidAnswer(s.trim().to_string())),
        }
    }

    /// Whether this is a "yes".
    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Answer {
    fn from(is_yes: bool) -> Self {
        if is_yes { Self::Yes } else { Self::No }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}
