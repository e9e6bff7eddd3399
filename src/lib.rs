//! Word-level tokenizer with position-tagged tokens.
//!
//! Words get ids on first sight. Each token is the zero-padded word position
//! followed by the zero-padded id, so a plain string sort of the tokens puts
//! them back in word order.
//!
//! ```
//! use word_tokenizer::{Tokenizer, WordTokenizer};
//!
//! let mut tokenizer = WordTokenizer::new();
//! let tokens = tokenizer.encode("Hello my name is Kai").unwrap();
//! assert_eq!(tokens[1], "00010001");
//!
//! let shuffled = [&tokens[4], &tokens[0], &tokens[2], &tokens[1], &tokens[3]];
//! assert_eq!(tokenizer.decode(&shuffled).unwrap(), "Hello my name is Kai");
//! ```

mod base;
pub mod config;
mod error;
pub mod session;
mod token;
mod vocab;
mod word;

pub use base::{Token, TokenId, Tokenizer};
pub use config::TokenizerConfig;
pub use error::{OverflowKind, Result, TokenizerError};
pub use session::Session;
pub use token::TokenFormat;
pub use vocab::Vocabulary;
pub use word::WordTokenizer;
