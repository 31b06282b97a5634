//! Command handlers for the `gradestats` CLI

pub mod report;
