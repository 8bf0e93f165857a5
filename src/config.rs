// Fri Oct 16 2026 - Alex

use crate::error::{ConvertError, Result};
use crate::output::{GoFormatter, DEFAULT_BATCH_SIZE, DEFAULT_INDENT, DEFAULT_PACKAGE, DEFAULT_VARIABLE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type", "var",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub package_name: String,
    pub variable_name: String,
    pub batch_size: usize,
    pub indent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            package_name: DEFAULT_PACKAGE.to_string(),
            variable_name: DEFAULT_VARIABLE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_package(mut self, name: String) -> Self {
        self.package_name = name;
        self
    }

    pub fn with_variable(mut self, name: String) -> Self {
        self.variable_name = name;
        self
    }

    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    pub fn with_indent(mut self, indent: String) -> Self {
        self.indent = indent;
        self
    }

    /// Input and output paths, both of which must be set.
    pub fn paths(&self) -> Result<(PathBuf, PathBuf)> {
        let input = self
            .input
            .clone()
            .ok_or_else(|| ConvertError::Config("input path must be set".to_string()))?;
        let output = self
            .output
            .clone()
            .ok_or_else(|| ConvertError::Config("output path must be set".to_string()))?;
        Ok((input, output))
    }

    pub fn validate(&self) -> Result<()> {
        self.paths()?;
        if self.batch_size == 0 {
            return Err(ConvertError::Config("batch_size must be greater than 0".to_string()));
        }
        if !is_go_identifier(&self.package_name) {
            return Err(ConvertError::Config(format!(
                "package name {:?} is not a valid Go identifier",
                self.package_name
            )));
        }
        if !is_go_identifier(&self.variable_name) {
            return Err(ConvertError::Config(format!(
                "variable name {:?} is not a valid Go identifier",
                self.variable_name
            )));
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(ConvertError::Config(format!(
                "indent {:?} may only contain spaces and tabs",
                self.indent
            )));
        }
        Ok(())
    }

    pub fn formatter(&self) -> GoFormatter {
        GoFormatter::new()
            .with_package(&self.package_name)
            .with_variable(&self.variable_name)
            .with_batch_size(self.batch_size)
            .with_indent(&self.indent)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|e| ConvertError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match ext.to_lowercase().as_str() {
            "json" => serde_json::from_str(&contents).map_err(|e| ConvertError::ConfigFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
            _ => Err(ConvertError::UnsupportedFormat(ext.to_string())),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        if !ext.eq_ignore_ascii_case("json") {
            return Err(ConvertError::UnsupportedFormat(ext.to_string()));
        }

        let contents = serde_json::to_string_pretty(self).map_err(|e| ConvertError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        fs::write(path, contents).map_err(|e| ConvertError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

pub fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let first_ok = match chars.next() {
        Some(c) => c == '_' || c.is_ascii_alphabetic(),
        None => false,
    };
    first_ok && chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) && !GO_KEYWORDS.contains(&name)
}
