use crate::error::Result;

/// A positional token: zero-padded position followed by zero-padded id.
pub type Token = String;
pub type TokenId = u32;

pub trait Tokenizer {
    fn encode(&mut self, text: &str) -> Result<Vec<Token>>;
    fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String>;
}
