//! Five-number summary statistics
//!
//! Quartiles use linear interpolation between closest ranks, the same
//! method NumPy uses by default, so the median is the standard
//! even/odd-count median and Q1/Q3 match textbook values.

use crate::core::models::Course;
use serde::Serialize;

/// Five-number summary of a grade distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    /// Smallest grade value
    pub min: f64,
    /// 25th percentile
    pub first_quartile: f64,
    /// 50th percentile
    pub median: f64,
    /// 75th percentile
    pub third_quartile: f64,
    /// Largest grade value
    pub max: f64,
}

/// One summary table row: a course code and its statistics, if any
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Course code, possibly redacted
    pub code: String,
    /// `None` when the course has no valid grade values
    pub summary: Option<FiveNumberSummary>,
}

impl FiveNumberSummary {
    /// Compute the summary for a grade sequence.
    ///
    /// Returns `None` for an empty sequence; an empty course is an
    /// absence of data, not an error and not a row of zeros.
    #[must_use]
    pub fn from_grades(grades: &[f64]) -> Option<Self> {
        if grades.is_empty() {
            return None;
        }

        let mut sorted = grades.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            min: sorted[0],
            first_quartile: percentile_of_sorted(&sorted, 25.0),
            median: percentile_of_sorted(&sorted, 50.0),
            third_quartile: percentile_of_sorted(&sorted, 75.0),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Produce one summary row per course, preserving collection order.
#[must_use]
pub fn summarize(courses: &[Course]) -> Vec<SummaryRow> {
    courses
        .iter()
        .map(|course| SummaryRow {
            code: course.code.clone(),
            summary: FiveNumberSummary::from_grades(&course.grades),
        })
        .collect()
}

/// Value at the `pct` percentile of a sorted sample set, by linear
/// interpolation between closest ranks.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn percentile_of_sorted(sorted: &[f64], pct: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (pct / 100.0) * (sorted.len() - 1) as f64;
    let below = rank.floor();
    let fraction = rank - below;
    let idx = below as usize;
    if idx + 1 >= sorted.len() {
        return sorted[sorted.len() - 1];
    }

    sorted[idx] + fraction * (sorted[idx + 1] - sorted[idx])
}
