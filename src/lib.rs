//! Shared library for `grade-stats`
//! Contains the grade statistics core used by the `gradestats` CLI binary

pub mod core;

pub use self::core::*;
