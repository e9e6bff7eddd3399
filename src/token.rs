//! Fixed-width positional token codec.
//!
//! A token is `zero_pad(position, width) + zero_pad(id, width)`. Because the
//! position comes first and is zero padded, sorting tokens as plain strings
//! sorts them by position.

use crate::base::{Token, TokenId};
use crate::config::DEFAULT_WIDTH;
use crate::error::{OverflowKind, Result, TokenizerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenFormat {
    width: usize,
}

impl Default for TokenFormat {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl TokenFormat {
    /// `width` must already be validated by [`TokenizerConfig::validate`](crate::TokenizerConfig::validate).
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Largest value either half can hold, `10^width - 1`.
    pub fn max_value(&self) -> usize {
        10usize.pow(self.width as u32) - 1
    }

    pub fn check(&self, kind: OverflowKind, value: usize) -> Result<()> {
        let max = self.max_value();
        if value > max {
            return Err(TokenizerError::Overflow { kind, value, max });
        }
        Ok(())
    }

    pub fn format(&self, position: usize, id: TokenId) -> Result<Token> {
        self.check(OverflowKind::Position, position)?;
        self.check(OverflowKind::TokenId, id as usize)?;
        let width = self.width;
        Ok(format!("{position:0width$}{id:0width$}"))
    }

    /// Reads the id from everything after the position prefix.
    ///
    /// The id is returned unbounded: a numeric suffix too large for a
    /// [`TokenId`] is still an id, just one that was never assigned.
    pub fn parse_id(&self, token: &str) -> Result<u64> {
        let malformed = || TokenizerError::MalformedToken(token.to_string());
        let suffix = token.get(self.width..).ok_or_else(malformed)?;
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        // all digits, so the only failure left is a value past u64::MAX
        Ok(suffix.parse().unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pads_both_halves() {
        let format = TokenFormat::default();
        assert_eq!(format.format(0, 0).unwrap(), "00000000");
        assert_eq!(format.format(1, 1).unwrap(), "00010001");
        assert_eq!(format.format(12, 345).unwrap(), "00120345");
        assert_eq!(format.format(9999, 9999).unwrap(), "99999999");
    }

    #[test]
    fn format_rejects_values_past_width() {
        let format = TokenFormat::default();
        assert!(matches!(
            format.format(10_000, 0),
            Err(TokenizerError::Overflow {
                kind: OverflowKind::Position,
                value: 10_000,
                max: 9999
            })
        ));
        assert!(matches!(
            format.format(0, 10_000),
            Err(TokenizerError::Overflow {
                kind: OverflowKind::TokenId,
                ..
            })
        ));
    }

    #[test]
    fn custom_width() {
        let format = TokenFormat::new(2);
        assert_eq!(format.max_value(), 99);
        assert_eq!(format.format(3, 7).unwrap(), "0307");
        assert_eq!(format.parse_id("0307").unwrap(), 7);
        assert!(format.format(100, 0).is_err());
    }

    #[test]
    fn parse_id_reads_suffix() {
        let format = TokenFormat::default();
        assert_eq!(format.parse_id("00040004").unwrap(), 4);
        assert_eq!(format.parse_id("00000123").unwrap(), 123);
        // only the suffix matters
        assert_eq!(format.parse_id("abcd0002").unwrap(), 2);
        assert_eq!(format.parse_id("00005").unwrap(), 5);
    }

    #[test]
    fn parse_id_rejects_malformed_tokens() {
        let format = TokenFormat::default();
        for token in ["", "0000", "123", "0000abcd", "00001x", "0000+001", "0000 001"] {
            assert!(
                matches!(format.parse_id(token), Err(TokenizerError::MalformedToken(_))),
                "{token:?} should be malformed"
            );
        }
    }

    #[test]
    fn parse_id_rejects_split_multibyte_prefix() {
        let format = TokenFormat::default();
        // offset 4 lands inside 'é'
        assert!(matches!(
            format.parse_id("abcé0001"),
            Err(TokenizerError::MalformedToken(_))
        ));
    }

    #[test]
    fn parse_id_keeps_ids_past_u32() {
        let format = TokenFormat::default();
        assert_eq!(format.parse_id("000099999999999").unwrap(), 99_999_999_999);
        assert_eq!(
            format.parse_id("0000123456789012345678901234").unwrap(),
            u64::MAX
        );
    }
}
