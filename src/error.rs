// Fri Oct 16 2026 - Alex

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read input {path:?}: {source}")]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write output {path:?}: {source}")]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Config file {path:?}: {reason}")]
    ConfigFile { path: PathBuf, reason: String },
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

impl ConvertError {
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::InputAccess { path: path.into(), source }
    }

    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::OutputAccess { path: path.into(), source }
    }

    pub fn is_input_access(&self) -> bool {
        matches!(self, ConvertError::InputAccess { .. })
    }

    pub fn is_output_access(&self) -> bool {
        matches!(self, ConvertError::OutputAccess { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
