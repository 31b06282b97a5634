//! Report rendering for grade statistics
//!
//! Two renderers share the ordered course collection: a plain-text
//! summary table for stdout and a box-plot chart written to an image
//! file.

pub mod chart;
pub mod table;

pub use chart::render_box_plot;
pub use table::render_table;
