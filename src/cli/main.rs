//! Command-line interface entry point for `gradestats`

mod args;
mod commands;

use args::Cli;
use clap::Parser;
use grade_stats::config::Config;
use log::{error, LevelFilter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    config.apply_overrides(&args.to_config_overrides());

    init_logging(&config);

    if let Err(err) = commands::report::run(&args, &config) {
        error!(
            "Report generation failed for {}: {err}",
            args.input_filename.display()
        );
        eprintln!("✗ {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the logger from the effective configuration.
///
/// Verbose raises the level floor to info; a configured log file
/// redirects output away from stderr.
fn init_logging(config: &Config) {
    let mut level = parse_level(&config.logging.level).unwrap_or(LevelFilter::Warn);
    if config.logging.verbose && level < LevelFilter::Info {
        level = LevelFilter::Info;
    }

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if !config.logging.file.is_empty() {
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.logging.file)
        {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(err) => {
                eprintln!("✗ Failed to open log file {}: {err}", config.logging.file);
            }
        }
    }

    let _ = builder.try_init();
}

fn parse_level(val: &str) -> Option<LevelFilter> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("error"), Some(LevelFilter::Error));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("Info"), Some(LevelFilter::Info));
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("trace"), None);
        assert_eq!(parse_level(""), None);
    }
}
