//! Tokenizer configuration.

use crate::error::{Result, TokenizerError};

/// Digits per token half in the classic 8-character token.
pub const DEFAULT_WIDTH: usize = 4;

/// Words are separated by exactly one ASCII space.
pub const DEFAULT_DELIMITER: &str = " ";

/// `10^9` still fits in a `u32` id.
pub const MAX_WIDTH: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Zero-padded digits for each of the position and id halves
    pub width: usize,
    /// Regex matched between words
    pub delimiter: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl TokenizerConfig {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Patterns that match the empty string are rejected later, when compiled.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(TokenizerError::InvalidConfig(format!(
                "width must be between 1 and {MAX_WIDTH}, got {}",
                self.width
            )));
        }
        if self.delimiter.is_empty() {
            return Err(TokenizerError::InvalidConfig(
                "delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
