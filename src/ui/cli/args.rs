// Sat Oct 17 2026 - Alex

use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hex2go")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Turns 0xNN byte literals from a C header into a Go []byte variable", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    /// JSON file with default settings; flags given on the command line win
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the Go source file
    Convert(ConvertArgs),
    /// Exit non-zero when the Go source file is missing or out of date
    Check(CheckArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct TargetArgs {
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub package: Option<String>,

    #[arg(long)]
    pub variable: Option<String>,

    #[arg(long)]
    pub batch_size: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print the generated source instead of writing it
    #[arg(long, conflicts_with = "json")]
    pub dry_run: bool,

    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl TargetArgs {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config = config.with_input(input.clone());
        }
        if let Some(output) = &self.output {
            config = config.with_output(output.clone());
        }
        if let Some(package) = &self.package {
            config = config.with_package(package.clone());
        }
        if let Some(variable) = &self.variable {
            config = config.with_variable(variable.clone());
        }
        if let Some(size) = self.batch_size {
            config = config.with_batch_size(size);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let args = Args::try_parse_from([
            "hex2go", "convert", "-i", "Driver.h", "-o", "core/driver.go", "--batch-size", "8", "--json",
        ])
        .unwrap();

        match args.command {
            Command::Convert(convert) => {
                assert_eq!(convert.target.input, Some(PathBuf::from("Driver.h")));
                assert_eq!(convert.target.batch_size, Some(8));
                assert!(convert.json);
                assert!(!convert.dry_run);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_dry_run_conflicts_with_json() {
        let err = Args::try_parse_from(["hex2go", "convert", "-i", "a.h", "-o", "a.go", "--dry-run", "--json"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["hex2go", "check", "-o", "x.go", "--quiet", "-c", "hex2go.json"]).unwrap();
        assert!(args.quiet);
        assert_eq!(args.config, Some(PathBuf::from("hex2go.json")));
        assert!(matches!(args.command, Command::Check(_)));
    }

    #[test]
    fn test_apply_overrides() {
        let base = Config::new()
            .with_input(PathBuf::from("from_file.h"))
            .with_variable("FromFile".to_string());
        let target = TargetArgs {
            output: Some(PathBuf::from("out.go")),
            variable: Some("FromFlag".to_string()),
            ..Default::default()
        };

        let config = target.apply(base);
        assert_eq!(config.input, Some(PathBuf::from("from_file.h")));
        assert_eq!(config.output, Some(PathBuf::from("out.go")));
        assert_eq!(config.variable_name, "FromFlag");
        assert_eq!(config.batch_size, 12);
    }
}
