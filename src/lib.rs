// Sat Oct 17 2026 - Alex

pub mod config;
pub mod converter;
pub mod error;
pub mod output;
pub mod pattern;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use converter::{convert_file, CheckOutcome, Converter};
pub use error::ConvertError;
pub use output::{ConversionReport, GoFormatter, OutputDocument};
pub use pattern::{Token, TokenScanner};
