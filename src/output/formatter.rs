// Fri Oct 16 2026 - Alex

use crate::output::OutputDocument;
use crate::pattern::Token;
use itertools::Itertools;

pub const DEFAULT_PACKAGE: &str = "core";
pub const DEFAULT_VARIABLE: &str = "AppleDriver43";
pub const DEFAULT_BATCH_SIZE: usize = 12;
pub const DEFAULT_INDENT: &str = "\t";

/// Lays tokens out as the body of a Go `[]byte` literal.
pub struct GoFormatter {
    package_name: String,
    variable_name: String,
    batch_size: usize,
    indent: String,
}

impl GoFormatter {
    pub fn new() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE.to_string(),
            variable_name: DEFAULT_VARIABLE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            indent: DEFAULT_INDENT.to_string(),
        }
    }

    pub fn with_package(mut self, name: &str) -> Self {
        self.package_name = name.to_string();
        self
    }

    pub fn with_variable(mut self, name: &str) -> Self {
        self.variable_name = name.to_string();
        self
    }

    /// A batch size of zero is treated as one token per line.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn format_batch(&self, batch: &[Token]) -> String {
        format!("{}{},", self.indent, batch.iter().map(Token::as_str).join(", "))
    }

    pub fn render(&self, tokens: &[Token]) -> OutputDocument {
        let body: Vec<String> = tokens
            .chunks(self.batch_size)
            .map(|batch| self.format_batch(batch))
            .collect();

        log::debug!(
            "Rendered {} tokens into {} lines (batch size {})",
            tokens.len(),
            body.len(),
            self.batch_size
        );

        OutputDocument {
            package_name: self.package_name.clone(),
            variable_name: self.variable_name.clone(),
            body,
            token_count: tokens.len(),
        }
    }
}

impl Default for GoFormatter {
    fn default() -> Self {
        Self::new()
    }
}
