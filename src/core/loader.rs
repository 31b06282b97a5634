//! CSV loader, redaction policy, and redaction-aware ordering
//!
//! The input file is expected to have two columns: a course code and a
//! comma-separated list of grade values, e.g.
//!
//! ```text
//! Course,Grades
//! MATH 151,"0.95,1,1,1,1,1,1,1,0.96,0.99,1.05,0.81"
//! MATH 152,"1.0667,1,1,1,1,1,1,1,1.01,0.98,0.99,1.1"
//! ```
//!
//! A header is optional, but is expected by default. When a whitelist is
//! given, rows whose code is not in it have the code replaced with
//! [`REDACTED_CODE`]; redacted rows sort after all non-redacted rows and
//! their order among themselves is randomized on every run.

use crate::core::models::{Course, REDACTED_CODE};
use log::debug;
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that abort a load
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be opened or a record could not be read
    #[error("failed to read '{path}': {source}")]
    Read {
        /// Input path as given by the caller
        path: String,
        /// Underlying CSV/IO error
        #[source]
        source: csv::Error,
    },

    /// A data row has a course code but no grades column
    #[error("row {row} is missing the grades column")]
    MissingGradesColumn {
        /// 1-based data row number (after any header skip)
        row: usize,
    },
}

/// Load course records from a CSV file and order them for reporting.
///
/// Grade tokens that fail to parse as numbers are dropped silently; an
/// empty grades field yields an empty grade sequence. Rows whose code is
/// absent from `whitelist` are redacted; passing `None` keeps every code.
/// Non-redacted rows keep their file order and sort ahead of all redacted
/// rows.
///
/// # Arguments
/// * `path` - Path to the CSV input file
/// * `skip_header` - Whether to discard the first row unconditionally
/// * `whitelist` - Course codes that may be displayed, or `None` to
///   disable redaction
///
/// # Errors
/// Returns an error if the file cannot be read or a data row has fewer
/// than two fields.
pub fn load_courses<P: AsRef<Path>>(
    path: P,
    skip_header: bool,
    whitelist: Option<&HashSet<String>>,
) -> Result<Vec<Course>, LoadError> {
    let path = path.as_ref();
    let read_err = |source| LoadError::Read {
        path: path.display().to_string(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(skip_header)
        .flexible(true)
        .from_path(path)
        .map_err(read_err)?;

    let mut courses = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(read_err)?;
        let row = idx + 1;

        let raw_code = record.get(0).unwrap_or("");
        let Some(grades_field) = record.get(1) else {
            return Err(LoadError::MissingGradesColumn { row });
        };

        let code = apply_redaction(raw_code, whitelist);
        let grades = parse_grades(grades_field);
        courses.push(Course::new(code, grades));
    }

    debug!(
        "Loaded {} course rows from {}",
        courses.len(),
        path.display()
    );

    order_for_reporting(&mut courses);
    Ok(courses)
}

/// Resolve the code to display for a row.
///
/// Membership is verbatim: case-sensitive, no trimming. An empty
/// whitelist therefore redacts every row.
fn apply_redaction(code: &str, whitelist: Option<&HashSet<String>>) -> String {
    match whitelist {
        Some(listed) if !listed.contains(code) => REDACTED_CODE.to_string(),
        _ => code.to_string(),
    }
}

/// Parse the comma-separated grades field.
///
/// Tokens that are not valid numbers are dropped, not reported.
fn parse_grades(field: &str) -> Vec<f64> {
    if field.is_empty() {
        return Vec::new();
    }

    field
        .split(',')
        .filter_map(|token| token.trim().parse::<f64>().ok())
        .collect()
}

/// Order records for reporting: a stable partition keeps non-redacted
/// rows first in file order, then the contiguous redacted block is
/// shuffled so its internal order varies per run.
fn order_for_reporting(courses: &mut [Course]) {
    courses.sort_by_key(Course::is_redacted);

    let split = courses
        .iter()
        .position(Course::is_redacted)
        .unwrap_or(courses.len());
    courses[split..].shuffle(&mut thread_rng());
}
