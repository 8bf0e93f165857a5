// Fri Oct 16 2026 - Alex

pub mod formatter;
pub mod report;

pub use formatter::{GoFormatter, DEFAULT_BATCH_SIZE, DEFAULT_INDENT, DEFAULT_PACKAGE, DEFAULT_VARIABLE};
pub use report::ConversionReport;

use std::fmt;

/// A rendered Go source file holding a single byte slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    pub package_name: String,
    pub variable_name: String,
    pub body: Vec<String>,
    pub token_count: usize,
}

impl OutputDocument {
    pub fn body_lines(&self) -> &[String] {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.token_count == 0
    }
}

impl fmt::Display for OutputDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "package {}", self.package_name)?;
        writeln!(f)?;
        writeln!(f, "var {} = []byte{{", self.variable_name)?;
        for line in &self.body {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "}}")
    }
}
