// Fri Oct 16 2026 - Alex

use std::fmt;

/// A `0x`-prefixed two digit hex literal, kept exactly as it appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    offset: usize,
}

impl Token {
    pub(crate) fn new(text: &str, offset: usize) -> Self {
        Self {
            text: text.to_string(),
            offset,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte offset of the token in the scanned text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn value(&self) -> u8 {
        // the scanner only ever produces two hex digits after the prefix
        u8::from_str_radix(&self.text[2..], 16).unwrap_or_default()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_keeps_casing() {
        let token = Token::new("0xaB", 7);
        assert_eq!(token.as_str(), "0xaB");
        assert_eq!(token.to_string(), "0xaB");
        assert_eq!(token.offset(), 7);
    }

    #[test]
    fn test_token_value() {
        assert_eq!(Token::new("0x4C", 0).value(), 0x4c);
        assert_eq!(Token::new("0x00", 0).value(), 0);
        assert_eq!(Token::new("0xff", 0).value(), 0xff);
    }
}
