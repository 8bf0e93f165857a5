// Fri Oct 16 2026 - Alex

pub mod scanner;
pub mod token;

pub use scanner::{TokenScanner, HEX_BYTE_PATTERN};
pub use token::Token;

pub fn scan_tokens(text: &str) -> Vec<Token> {
    TokenScanner::new().scan(text)
}
