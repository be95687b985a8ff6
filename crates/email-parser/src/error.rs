//! Error types for email parsing

use thiserror::Error;

use crate::fsm::State;

/// Reasons an input is not a valid `addr-spec`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input has no characters at all
    #[error("cannot parse empty email address")]
    Empty,

    /// A character is not allowed where it appears
    #[error("unexpected character {ch:?} at byte {position} while in {state}")]
    UnexpectedChar {
        /// Offending character
        ch: char,
        /// Byte offset of the character in the input
        position: usize,
        /// State the automaton was in before reading the character
        state: State,
    },

    /// Input ended before a complete address was read
    #[error("incomplete email address, input ended while in {state}")]
    Incomplete {
        /// State the automaton was left in
        state: State,
    },
}

impl ParseError {
    /// Byte offset of the offending character, if the failure has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedChar { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Result type alias for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
