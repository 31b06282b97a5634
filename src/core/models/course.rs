//! Course record model

use serde::{Deserialize, Serialize};

/// Sentinel code substituted for courses that are not in the whitelist
pub const REDACTED_CODE: &str = "Redacted";

/// Represents one input row: a course code and its recorded grades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g., "MATH 151"), or [`REDACTED_CODE`]
    pub code: String,

    /// Grade values in file order; may be empty
    pub grades: Vec<f64>,
}

impl Course {
    /// Create a new course record
    ///
    /// # Arguments
    /// * `code` - Course code, already redacted if applicable
    /// * `grades` - Parsed grade values
    #[must_use]
    pub const fn new(code: String, grades: Vec<f64>) -> Self {
        Self { code, grades }
    }

    /// Create a record whose code has been redacted
    #[must_use]
    pub fn redacted(grades: Vec<f64>) -> Self {
        Self::new(REDACTED_CODE.to_string(), grades)
    }

    /// Whether this record carries the redaction sentinel instead of a
    /// real course code
    #[must_use]
    pub fn is_redacted(&self) -> bool {
        self.code == REDACTED_CODE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("MATH 151".to_string(), vec![0.95, 1.0, 0.81]);

        assert_eq!(course.code, "MATH 151");
        assert_eq!(course.grades.len(), 3);
        assert!(!course.is_redacted());
    }

    #[test]
    fn test_redacted_course() {
        let course = Course::redacted(vec![1.0]);

        assert_eq!(course.code, REDACTED_CODE);
        assert!(course.is_redacted());
    }

    #[test]
    fn test_empty_grades_allowed() {
        let course = Course::new("CHEM 101".to_string(), Vec::new());

        assert!(course.grades.is_empty());
        assert!(!course.is_redacted());
    }

    #[test]
    fn test_literal_redacted_code_in_input_counts_as_redacted() {
        // A file row whose code is literally "Redacted" is indistinguishable
        // from a redacted row once loaded.
        let course = Course::new(REDACTED_CODE.to_string(), Vec::new());
        assert!(course.is_redacted());
    }
}
