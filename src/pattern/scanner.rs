// Fri Oct 16 2026 - Alex

use crate::pattern::Token;
use once_cell::sync::Lazy;
use regex::Regex;

/// Lowercase `0x` followed by exactly two hex digits. Longer runs like
/// `0x1234` match on their first two digits only.
pub const HEX_BYTE_PATTERN: &str = r"0x[0-9a-fA-F]{2}";

static HEX_BYTE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(HEX_BYTE_PATTERN).unwrap());

/// Pulls hex byte literals out of arbitrary text. Matching is lexical only, so
/// literals inside comments and strings are picked up too.
pub struct TokenScanner {
    regex: &'static Regex,
}

impl TokenScanner {
    pub fn new() -> Self {
        Self {
            regex: &HEX_BYTE_REGEX,
        }
    }

    pub fn scan(&self, text: &str) -> Vec<Token> {
        let tokens: Vec<Token> = self
            .regex
            .find_iter(text)
            .map(|m| Token::new(m.as_str(), m.start()))
            .collect();

        log::debug!("Scanned {} bytes of text, found {} tokens", text.len(), tokens.len());
        tokens
    }

}

impl Default for TokenScanner {
    fn default() -> Self {
        Self::new()
    }
}
