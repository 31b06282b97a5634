//! Report command handler
//!
//! Loads the grade CSV, prints the five-number summary table to stdout,
//! and writes the box-plot image.

use grade_stats::config::Config;
use grade_stats::loader::load_courses;
use grade_stats::report::{render_box_plot, render_table};
use grade_stats::stats::summarize;
use log::info;
use std::collections::HashSet;
use std::error::Error;

use crate::args::Cli;

/// Run the full report pipeline for the parsed CLI arguments.
///
/// # Arguments
/// * `args` - Parsed CLI arguments
/// * `config` - Configuration with CLI overrides already applied
///
/// # Errors
/// Returns an error if the input cannot be loaded or the chart cannot be
/// written; the caller surfaces it and exits non-zero.
pub fn run(args: &Cli, config: &Config) -> Result<(), Box<dyn Error>> {
    let whitelist: Option<HashSet<String>> = if args.course_code_whitelist.is_empty() {
        None
    } else {
        Some(args.course_code_whitelist.iter().cloned().collect())
    };

    let courses = load_courses(
        &args.input_filename,
        config.input.skip_header,
        whitelist.as_ref(),
    )?;
    info!(
        "Loaded {} course rows from {}",
        courses.len(),
        args.input_filename.display()
    );

    let rows = summarize(&courses);
    println!("{}", render_table(&rows));

    render_box_plot(
        &courses,
        &config.chart.x_axis_label,
        &args.output_filename,
        (config.chart.width, config.chart.height),
    )?;

    println!("✓ Box plot written: {}", args.output_filename.display());
    info!("Box plot exported to: {}", args.output_filename.display());

    Ok(())
}
