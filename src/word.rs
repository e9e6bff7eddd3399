use fancy_regex::Regex;
use indexmap::IndexSet;
use lazy_static::lazy_static;
use tracing::debug;

use crate::base::{Token, TokenId, Tokenizer};
use crate::config::{DEFAULT_DELIMITER, TokenizerConfig};
use crate::error::{OverflowKind, Result, TokenizerError};
use crate::token::TokenFormat;
use crate::vocab::Vocabulary;

lazy_static! {
    static ref DEFAULT_DELIMITER_COMPILED_PATTERN: Regex = Regex::new(DEFAULT_DELIMITER).unwrap();
}

/// Word-level tokenizer that tags every word id with its position.
///
/// Ids are handed out on first sight and kept for the life of the tokenizer,
/// so tokens can only be decoded by the tokenizer that produced them.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    vocab: Vocabulary,
    format: TokenFormat,
    delimiter: Regex,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer {
    pub fn new() -> Self {
        WordTokenizer {
            vocab: Vocabulary::new(),
            format: TokenFormat::default(),
            delimiter: DEFAULT_DELIMITER_COMPILED_PATTERN.clone(),
        }
    }

    pub fn with_config(config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;
        let delimiter = if config.delimiter == DEFAULT_DELIMITER {
            DEFAULT_DELIMITER_COMPILED_PATTERN.clone()
        } else {
            Regex::new(&config.delimiter)?
        };
        // lookahead-only empty matches are caught per match in split_words
        if delimiter.is_match("")? {
            return Err(TokenizerError::InvalidConfig(format!(
                "delimiter {:?} matches the empty string",
                config.delimiter
            )));
        }
        Ok(WordTokenizer {
            vocab: Vocabulary::new(),
            format: TokenFormat::new(config.width),
            delimiter,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn format(&self) -> &TokenFormat {
        &self.format
    }

    /// Split on every delimiter match. Nothing is trimmed or collapsed, so
    /// adjacent delimiters produce empty words.
    fn split_words<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let mut words = Vec::new();
        let mut start = 0;
        for matched in self.delimiter.find_iter(text) {
            let matched = matched?;
            if matched.start() == matched.end() {
                return Err(TokenizerError::InvalidConfig(format!(
                    "delimiter {:?} matched the empty string at byte {}",
                    self.delimiter.as_str(),
                    matched.start()
                )));
            }
            words.push(&text[start..matched.start()]);
            start = matched.end();
        }
        words.push(&text[start..]);
        Ok(words)
    }
}

impl Tokenizer for WordTokenizer {
    /// Encodes `text` into one positional token per word.
    ///
    /// Either every word is encoded or, on overflow, the vocabulary is left
    /// exactly as it was.
    fn encode(&mut self, text: &str) -> Result<Vec<Token>> {
        let words = self.split_words(text)?;
        self.format
            .check(OverflowKind::Position, words.len().saturating_sub(1))?;

        let unseen: IndexSet<&str> = words
            .iter()
            .copied()
            .filter(|word| !self.vocab.contains(word))
            .collect();
        let next_len = self.vocab.len() + unseen.len();
        self.format
            .check(OverflowKind::TokenId, next_len.saturating_sub(1))?;

        let mut tokens = Vec::with_capacity(words.len());
        for (position, word) in words.iter().enumerate() {
            let id = self.vocab.resolve(word);
            tokens.push(self.format.format(position, id)?);
        }

        debug!(
            words = words.len(),
            new_words = unseen.len(),
            vocab_size = self.vocab.len(),
            "encoded text"
        );
        Ok(tokens)
    }

    /// Decodes tokens given in any order back into space-joined text.
    ///
    /// Sorting the full token strings restores word order because each
    /// token starts with its zero-padded position.
    fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String> {
        let mut sorted: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        sorted.sort_unstable();

        let mut words = Vec::with_capacity(sorted.len());
        for token in &sorted {
            let raw = self.format.parse_id(token)?;
            let id = TokenId::try_from(raw).map_err(|_| TokenizerError::Lookup(raw))?;
            words.push(self.vocab.reverse_lookup(id)?);
        }

        debug!(tokens = words.len(), "decoded tokens");
        Ok(words.join(" "))
    }
}
