//! Error types for the word tokenizer.

use std::fmt;

use thiserror::Error;

/// Which half of a token ran past the configured width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowKind {
    Position,
    TokenId,
}

impl fmt::Display for OverflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowKind::Position => write!(f, "position"),
            OverflowKind::TokenId => write!(f, "token id"),
        }
    }
}

#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Token id was never assigned by this vocabulary
    #[error("Unknown token ID: {0}")]
    Lookup(u64),

    /// Token too short, or its id suffix is not a decimal number
    #[error("Malformed token: {0:?}")]
    MalformedToken(String),

    /// Position or id does not fit the fixed token width
    #[error("{kind} {value} exceeds maximum of {max}")]
    Overflow {
        kind: OverflowKind,
        value: usize,
        max: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Delimiter pattern failed to compile or match
    #[error("Pattern error: {0}")]
    Pattern(#[from] fancy_regex::Error),
}

pub type Result<T> = std::result::Result<T, TokenizerError>;
