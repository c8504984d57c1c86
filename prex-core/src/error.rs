//! Error types for pattern compilation
//!
//! All failures surface while parsing; tokenizing never fails and a failed
//! match is an empty result list, not an error. Errors are built with the
//! `thiserror` crate and name the invariant that was violated, carrying the
//! offending pattern position where one exists.

use thiserror::Error;

/// A malformed-pattern error raised by `parse`
///
/// Positions count characters from the start of the pattern and refer to the
/// token that triggered the failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern produced no tokens at all
    #[error("empty pattern")]
    EmptyPattern,

    /// A `)` with no matching open `(`
    #[error("unmatched `)` (position {position})")]
    UnmatchedGroupClose {
        /// Position of the offending `)`
        position: usize,
    },

    /// A `(` that is never closed
    #[error("unclosed `(` (position {position})")]
    UnclosedGroup {
        /// Position of the offending `(`
        position: usize,
    },

    /// A group that closes with nothing inside it
    #[error("empty group (position {position})")]
    EmptyGroup {
        /// Position of the closing `)`
        position: usize,
    },

    /// A `*` with nothing before it to repeat
    #[error("`*` has no operand (position {position})")]
    MissingRepeatOperand {
        /// Position of the offending `*`
        position: usize,
    },

    /// A `|` with no alternative before it
    #[error("`|` has no operand (position {position})")]
    MissingAlternateOperand {
        /// Position of the offending `|`
        position: usize,
    },

    /// A start anchor that is not the first element of the pattern
    #[error("start anchor must open the pattern (position {position})")]
    MisplacedStartAnchor {
        /// Position of the offending `^`
        position: usize,
    },

    /// An end anchor that is not the last element of the pattern
    #[error("end anchor must close the pattern (position {position})")]
    MisplacedEndAnchor {
        /// Position of the offending `$`
        position: usize,
    },
}

/// Result type alias for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;
