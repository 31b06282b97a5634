//! CLI argument definitions for `gradestats`

use clap::{builder::BoolishValueParser, Parser, ValueEnum};
use std::path::PathBuf;

use grade_stats::config::ConfigOverrides;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Command-line arguments for the grade statistics report
#[derive(Parser, Debug)]
#[command(
    name = "gradestats",
    about = "Five-number summaries and box plots for course grade distributions",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// The CSV file containing grades to be summarized and plotted
    #[arg(long = "input_filename", value_name = "FILE")]
    pub input_filename: PathBuf,

    /// The output filename where the box plot image will be written
    #[arg(long = "output_filename", value_name = "FILE")]
    pub output_filename: PathBuf,

    /// A course code that may be displayed; repeat the flag for multiple
    /// codes. All course codes are displayed if this argument is omitted.
    #[arg(long = "course_code_whitelist", value_name = "CODE")]
    pub course_code_whitelist: Vec<String>,

    /// The x axis label for the box plot
    #[arg(long = "x_axis_label", value_name = "LABEL")]
    pub x_axis_label: Option<String>,

    /// Whether to discard the first input row as a header (overrides config)
    #[arg(long = "skip_header", value_name = "BOOL", value_parser = BoolishValueParser::new())]
    pub skip_header: Option<bool>,

    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration, where `None` means no override.
    #[must_use]
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.log_level.map(|lvl| lvl.to_string()),
            file: self
                .log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.verbose.then_some(true),
            skip_header: self.skip_header,
            x_axis_label: self.x_axis_label.clone(),
        }
    }
}
