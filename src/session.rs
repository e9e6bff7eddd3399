//! Line-oriented front end over a [`WordTokenizer`].
//!
//! Tokens are displayed as a `", "` separated list, and decode input is split
//! on commas with each token trimmed. Empty input is ignored.

use crate::base::{Token, Tokenizer};
use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::vocab::Vocabulary;
use crate::word::WordTokenizer;

pub const TOKEN_SEPARATOR: &str = ", ";

/// Joins tokens for display.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.join(TOKEN_SEPARATOR)
}

/// Splits a displayed token list back into tokens.
pub fn parse_token_list(input: &str) -> Vec<Token> {
    input
        .split(',')
        .map(|token| token.trim().to_string())
        .collect()
}

/// Owns one vocabulary for as long as the session lives.
#[derive(Debug, Clone, Default)]
pub struct Session {
    tokenizer: WordTokenizer,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &TokenizerConfig) -> Result<Self> {
        Ok(Session {
            tokenizer: WordTokenizer::with_config(config)?,
        })
    }

    pub fn encode_line(&mut self, text: &str) -> Result<Option<String>> {
        if text.is_empty() {
            return Ok(None);
        }
        let tokens = self.tokenizer.encode(text)?;
        Ok(Some(format_tokens(&tokens)))
    }

    pub fn decode_line(&self, input: &str) -> Result<Option<String>> {
        if input.is_empty() {
            return Ok(None);
        }
        let tokens = parse_token_list(input);
        self.tokenizer.decode(&tokens).map(Some)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.tokenizer.vocabulary()
    }

    pub fn tokenizer(&self) -> &WordTokenizer {
        &self.tokenizer
    }

    pub fn tokenizer_mut(&mut self) -> &mut WordTokenizer {
        &mut self.tokenizer
    }
}
