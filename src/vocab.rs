//! Vocabulary: first-seen word ids, growing monotonically.

use indexmap::IndexSet;
use tracing::trace;

use crate::base::TokenId;
use crate::error::{Result, TokenizerError};

/// Word to id mapping and its inverse.
///
/// Words are kept in insertion order, so a word's index in the set is its id.
/// Ids are contiguous from `0` to `len - 1` and are never reassigned.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: IndexSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id of `word`, assigning the next id if the word is new.
    pub fn resolve(&mut self, word: &str) -> TokenId {
        if let Some(id) = self.get_id(word) {
            return id;
        }
        let (index, _) = self.words.insert_full(word.to_string());
        let id = index as TokenId;
        trace!(id, word, "new vocabulary entry");
        id
    }

    /// Returns the word assigned to `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::Lookup`] if `id` was never assigned.
    pub fn reverse_lookup(&self, id: TokenId) -> Result<&str> {
        self.words
            .get_index(id as usize)
            .map(String::as_str)
            .ok_or(TokenizerError::Lookup(id.into()))
    }

    pub fn get_id(&self, word: &str) -> Option<TokenId> {
        self.words.get_index_of(word).map(|index| index as TokenId)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// `(id, word)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str)> {
        self.words
            .iter()
            .enumerate()
            .map(|(index, word)| (index as TokenId, word.as_str()))
    }
}
