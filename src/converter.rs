// Sat Oct 17 2026 - Alex

use crate::config::Config;
use crate::error::{ConvertError, Result};
use crate::output::{ConversionReport, GoFormatter, OutputDocument};
use crate::pattern::{scan_tokens, Token};
use crate::utils::logging::ScopedTimer;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

impl CheckOutcome {
    pub fn is_up_to_date(&self) -> bool {
        *self == CheckOutcome::UpToDate
    }
}

/// Result of reading and rendering the input without touching the output file.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub tokens: Vec<Token>,
    pub document: OutputDocument,
}

impl Rendered {
    pub fn text(&self) -> String {
        self.document.to_string()
    }
}

pub struct Converter {
    input: PathBuf,
    output: PathBuf,
    formatter: GoFormatter,
}

impl Converter {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let (input, output) = config.paths()?;

        Ok(Self {
            input,
            output,
            formatter: config.formatter(),
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    fn read_input(&self) -> Result<String> {
        let raw = fs::read(&self.input).map_err(|e| ConvertError::input(&self.input, e))?;
        log::debug!("Read {} bytes from {}", raw.len(), self.input.display());
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    pub fn render(&self) -> Result<Rendered> {
        let text = self.read_input()?;
        let tokens = scan_tokens(&text);
        let document = self.formatter.render(&tokens);

        if document.is_empty() {
            log::warn!("No hex byte literals found in {}", self.input.display());
        }

        Ok(Rendered { tokens, document })
    }

    pub fn convert(&self) -> Result<ConversionReport> {
        let _timer = ScopedTimer::new("convert");

        let rendered = self.render()?;
        let text = rendered.text();

        fs::write(&self.output, &text).map_err(|e| ConvertError::output(&self.output, e))?;
        log::info!("Wrote {} tokens to {}", rendered.document.token_count, self.output.display());

        Ok(ConversionReport {
            input: self.input.clone(),
            output: self.output.clone(),
            token_count: rendered.document.token_count,
            line_count: rendered.document.body_lines().len(),
            bytes_written: text.len(),
        })
    }

    /// Compares what `convert` would write with the file currently on disk.
    pub fn check(&self) -> Result<CheckOutcome> {
        let expected = self.render()?.text();

        let existing = match fs::read(&self.output) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CheckOutcome::Missing),
            Err(e) => return Err(ConvertError::output(&self.output, e)),
        };

        if existing == expected.as_bytes() {
            Ok(CheckOutcome::UpToDate)
        } else {
            log::debug!("{} differs from freshly rendered output", self.output.display());
            Ok(CheckOutcome::Stale)
        }
    }
}

pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConversionReport> {
    let config = Config::new()
        .with_input(input.as_ref().to_path_buf())
        .with_output(output.as_ref().to_path_buf());
    Converter::new(&config)?.convert()
}
