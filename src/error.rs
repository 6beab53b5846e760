use thiserror::Error;

use crate::types::{Match, Matches};

/// Classifies resolution errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MatchErrorKind {
    /// The needle matched nothing in the haystack
    NoMatch,
    /// The needle matched several entries and none of them exactly
    Ambiguous,
    /// The needle was given more than once (only with `DuplicatePolicy::Reject`)
    DuplicateNeedle,
}

/// Resolution error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError<'h> {
    #[error("{needle} matches no fields")]
    NoMatch { needle: String },

    #[error("{needle} matches {count} fields", count = .matches.len())]
    Ambiguous { needle: String, matches: Matches<'h> },

    #[error("{needle} given more than once")]
    DuplicateNeedle { needle: String },
}

impl<'h> MatchError<'h> {
    /// Get the error kind
    pub fn kind(&self) -> MatchErrorKind {
        match self {
            MatchError::NoMatch { .. } => MatchErrorKind::NoMatch,
            MatchError::Ambiguous { .. } => MatchErrorKind::Ambiguous,
            MatchError::DuplicateNeedle { .. } => MatchErrorKind::DuplicateNeedle,
        }
    }

    /// The needle that failed to resolve
    pub fn needle(&self) -> &str {
        match self {
            MatchError::NoMatch { needle }
            | MatchError::Ambiguous { needle, .. }
            | MatchError::DuplicateNeedle { needle } => needle,
        }
    }

    /// Every candidate found for the needle; empty unless ambiguous.
    pub fn matches(&self) -> &[Match<'h>] {
        match self {
            MatchError::Ambiguous { matches, .. } => matches.as_slice(),
            _ => &[],
        }
    }

    /// Returns true if the error occurred because several candidates matched
    pub fn is_ambiguous(&self) -> bool {
        self.matches().len() > 1
    }
}

/// Result type for resolution, borrowing the haystack
pub type Result<'h, T> = std::result::Result<T, MatchError<'h>>;
