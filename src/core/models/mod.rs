//! Data models for `grade-stats`

pub mod course;

pub use course::{Course, REDACTED_CODE};
