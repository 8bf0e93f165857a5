// Fri Oct 16 2026 - Alex

use serde::Serialize;
use std::path::PathBuf;

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub token_count: usize,
    pub line_count: usize,
    pub bytes_written: usize,
}

impl ConversionReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} tokens in {} lines ({} bytes) -> {}",
            self.token_count,
            self.line_count,
            self.bytes_written,
            self.output.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConversionReport {
        ConversionReport {
            input: PathBuf::from("Driver.h"),
            output: PathBuf::from("core/driver.go"),
            token_count: 25,
            line_count: 3,
            bytes_written: 210,
        }
    }

    #[test]
    fn test_report_json() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["token_count"], 25);
        assert_eq!(value["line_count"], 3);
        assert_eq!(value["output"], "core/driver.go");
    }

    #[test]
    fn test_report_summary() {
        assert_eq!(sample().summary(), "25 tokens in 3 lines (210 bytes) -> core/driver.go");
    }
}
