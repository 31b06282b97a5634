//! Summary table renderer

use crate::core::stats::SummaryRow;
use comfy_table::{
    presets::ASCII_MARKDOWN, Cell, CellAlignment, ContentArrangement, Row as TRow, Table,
};

/// Column headers for the summary table
const HEADERS: [&str; 6] = [
    "Course Code",
    "Minimum",
    "First Quartile",
    "Median",
    "Third Quartile",
    "Maximum",
];

/// Render summary rows as a human-readable table.
///
/// Courses without grade data get blank statistic cells rather than
/// zeros or placeholder text.
#[must_use]
pub fn render_table(rows: &[SummaryRow]) -> String {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(HEADERS.to_vec());

    for row in rows {
        let mut cells = TRow::new();
        cells.add_cell(Cell::new(&row.code).set_alignment(CellAlignment::Left));
        for value in stat_cells(row) {
            cells.add_cell(Cell::new(value).set_alignment(CellAlignment::Right));
        }
        table.add_row(cells);
    }

    table.to_string()
}

/// The five statistic cells for a row, blank when the course has no data
fn stat_cells(row: &SummaryRow) -> [String; 5] {
    row.summary.map_or_else(
        || std::array::from_fn(|_| String::new()),
        |s| {
            [
                fmt_stat(s.min),
                fmt_stat(s.first_quartile),
                fmt_stat(s.median),
                fmt_stat(s.third_quartile),
                fmt_stat(s.max),
            ]
        },
    )
}

/// Format a statistic with up to six decimal places, trimming trailing
/// zeros so interpolation noise does not leak into the table.
fn fmt_stat(value: f64) -> String {
    let fixed = format!("{value:.6}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
