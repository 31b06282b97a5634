//! Core module for the grade statistics pipeline

pub mod config;
pub mod loader;
pub mod models;
pub mod report;
pub mod stats;

/// Returns the current version of the `grade_stats` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
