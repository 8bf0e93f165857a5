// Sat Oct 17 2026 - Alex

use super::args::{Args, CheckArgs, Command, ConvertArgs, TargetArgs};
use crate::config::Config;
use crate::converter::{CheckOutcome, Converter};
use crate::ui;
use crate::utils::logging::LoggingUtils;
use anyhow::Context;
use log::LevelFilter;
use std::path::PathBuf;

pub struct CommandHandler {
    quiet: bool,
    config_path: Option<PathBuf>,
}

impl CommandHandler {
    pub fn new(args: &Args) -> Self {
        Self {
            quiet: args.quiet,
            config_path: args.config.clone(),
        }
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_output(&args);

        match args.command {
            Command::Convert(convert_args) => self.handle_convert(convert_args),
            Command::Check(check_args) => self.handle_check(check_args),
        }
    }

    fn setup_output(&self, args: &Args) {
        if args.no_color {
            colored::control::set_override(false);
        }

        let level = if args.quiet {
            LevelFilter::Error
        } else {
            LoggingUtils::level_from_str(&args.log_level)
        };
        LoggingUtils::init_logger(level);
    }

    fn build_converter(&self, target: &TargetArgs) -> anyhow::Result<Converter> {
        let base = match &self.config_path {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        let config = target.apply(base);
        Ok(Converter::new(&config)?)
    }

    fn handle_convert(&self, args: ConvertArgs) -> anyhow::Result<()> {
        let converter = self.build_converter(&args.target)?;

        if args.dry_run {
            let rendered = converter.render()?;
            print!("{}", rendered.text());
            return Ok(());
        }

        if !self.quiet && !args.json {
            ui::print_info(&format!("Reading {}", converter.input().display()));
        }

        let report = converter.convert()?;

        if args.json {
            println!("{}", report.to_json()?);
        } else if !self.quiet {
            ui::print_success(&report.summary());
        }

        Ok(())
    }

    fn handle_check(&self, args: CheckArgs) -> anyhow::Result<()> {
        let converter = self.build_converter(&args.target)?;
        let output = converter.output().display().to_string();

        match converter.check()? {
            CheckOutcome::UpToDate => {
                if !self.quiet {
                    ui::print_success(&format!("{} is up to date", output));
                }
                Ok(())
            }
            CheckOutcome::Stale => Err(anyhow::anyhow!("{} is out of date, run convert", output)),
            CheckOutcome::Missing => Err(anyhow::anyhow!("{} does not exist, run convert", output)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn run(argv: &[&str]) -> anyhow::Result<()> {
        let args = Args::try_parse_from(argv)?;
        CommandHandler::new(&args).execute(args)
    }

    #[test]
    fn test_convert_then_check() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Driver.h");
        let output = dir.path().join("driver.go");
        fs::write(&input, "0x4C, 0x4B, 0x60").unwrap();
        let (input, output) = (input.to_str().unwrap(), output.to_str().unwrap());

        assert!(run(&["hex2go", "-q", "check", "-i", input, "-o", output]).is_err());
        run(&["hex2go", "-q", "convert", "-i", input, "-o", output]).unwrap();
        run(&["hex2go", "-q", "check", "-i", input, "-o", output]).unwrap();

        assert!(run(&["hex2go", "-q", "check", "-i", input, "-o", output, "--variable", "Other"]).is_err());
    }

    #[test]
    fn test_config_file_with_flag_override() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Driver.h");
        let output = dir.path().join("driver.go");
        fs::write(&input, "0x01 0x02 0x03").unwrap();

        let config = Config::new()
            .with_input(input.clone())
            .with_output(output.clone())
            .with_package("driver".to_string())
            .with_batch_size(2);
        let config_path = dir.path().join("hex2go.json");
        config.save(&config_path).unwrap();

        run(&["hex2go", "-q", "-c", config_path.to_str().unwrap(), "convert", "--variable", "Blob"]).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "package driver\n\nvar Blob = []byte{\n\t0x01, 0x02,\n\t0x03,\n}\n"
        );
    }

    #[test]
    fn test_dry_run_leaves_output_alone() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Driver.h");
        let output = dir.path().join("driver.go");
        fs::write(&input, "0x01").unwrap();

        run(&["hex2go", "-q", "convert", "-i", input.to_str().unwrap(), "-o", output.to_str().unwrap(), "--dry-run"]).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_paths() {
        assert!(run(&["hex2go", "-q", "convert", "-i", "Driver.h"]).is_err());
    }
}
