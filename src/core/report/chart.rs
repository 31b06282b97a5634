//! Box-plot chart renderer
//!
//! Draws one horizontal box-and-whisker row per course, first course at
//! the top. Whiskers span the full data range rather than the 1.5 IQR
//! fences used by stock box-plot elements, so the rows are assembled
//! from primitive path and rectangle elements.

use crate::core::models::Course;
use crate::core::stats::FiveNumberSummary;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

/// Fraction of headroom added above the largest grade on the value axis
const X_HEADROOM: f64 = 0.05;
/// Half-height of a box, in category-axis units
const BOX_HALF_HEIGHT: f64 = 0.25;
/// Half-height of a whisker end cap
const CAP_HALF_HEIGHT: f64 = 0.12;
/// Approximate pixel width of one label character, used to size the
/// category label area so long course codes are not clipped
const LABEL_CHAR_WIDTH: u32 = 9;

/// Render a horizontal box plot for each course and write it to `output`.
///
/// The output format is inferred from the file extension: `.svg`
/// produces vector output, anything else goes through the bitmap
/// backend.
///
/// # Arguments
/// * `courses` - Ordered course collection; the first course appears at
///   the top of the chart
/// * `x_axis_label` - Label for the value axis
/// * `output` - Destination image path
/// * `size` - Output dimensions in pixels
///
/// # Errors
/// Returns an error if the backend cannot write to `output` or drawing
/// fails.
pub fn render_box_plot(
    courses: &[Course],
    x_axis_label: &str,
    output: &Path,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    match output.extension().and_then(|ext| ext.to_str()) {
        Some("svg") => {
            let root = SVGBackend::new(output, size).into_drawing_area();
            draw_box_plots(&root, courses, x_axis_label)
        }
        _ => {
            let root = BitMapBackend::new(output, size).into_drawing_area();
            draw_box_plots(&root, courses, x_axis_label)
        }
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn draw_box_plots<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    courses: &[Course],
    x_axis_label: &str,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let summaries: Vec<Option<FiveNumberSummary>> = courses
        .iter()
        .map(|course| FiveNumberSummary::from_grades(&course.grades))
        .collect();
    let codes: Vec<String> = courses.iter().map(|course| course.code.clone()).collect();
    let count = codes.len();

    // Value axis is clamped to zero on the left; headroom keeps the
    // rightmost whisker off the frame.
    let x_max = courses
        .iter()
        .flat_map(|course| course.grades.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    let x_upper = if x_max.is_finite() && x_max > 0.0 {
        x_max * (1.0 + X_HEADROOM)
    } else {
        1.0
    };

    let longest_code = codes.iter().map(String::len).max().unwrap_or(0) as u32;
    let y_label_area = longest_code * LABEL_CHAR_WIDTH + 20;

    // Rows sit at integer y positions; the first course maps to the
    // topmost row (inverted category axis).
    let y_upper = count.max(1) as f64 - 0.5;
    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(y_label_area)
        .build_cartesian_2d(0f64..x_upper, -0.5f64..y_upper)?;

    chart
        .configure_mesh()
        .x_desc(x_axis_label)
        .y_labels(count.max(1))
        .y_label_formatter(&|y: &f64| {
            let slot = y.round();
            if slot < 0.0 {
                return String::new();
            }
            count
                .checked_sub(slot as usize + 1)
                .and_then(|idx| codes.get(idx))
                .cloned()
                .unwrap_or_default()
        })
        .draw()?;

    let stroke = ShapeStyle::from(&BLUE);
    let median_stroke = ShapeStyle::from(&RED);

    // Whisker lines with end caps, spanning the full data range.
    chart.draw_series(summaries.iter().enumerate().flat_map(|(idx, summary)| {
        let y = row_center(count, idx);
        summary
            .map(|s| whisker_elements(&s, y, stroke))
            .into_iter()
            .flatten()
    }))?;

    // Boxes spanning the first to third quartile.
    chart.draw_series(summaries.iter().enumerate().filter_map(|(idx, summary)| {
        summary.map(|s| {
            let y = row_center(count, idx);
            Rectangle::new(
                [
                    (s.first_quartile, y - BOX_HALF_HEIGHT),
                    (s.third_quartile, y + BOX_HALF_HEIGHT),
                ],
                stroke,
            )
        })
    }))?;

    // Median markers.
    chart.draw_series(summaries.iter().enumerate().filter_map(|(idx, summary)| {
        summary.map(|s| {
            let y = row_center(count, idx);
            PathElement::new(
                vec![(s.median, y - BOX_HALF_HEIGHT), (s.median, y + BOX_HALF_HEIGHT)],
                median_stroke,
            )
        })
    }))?;

    root.present()?;
    Ok(())
}

/// Vertical center of row `index`, counting the first course from the top
#[allow(clippy::cast_precision_loss)]
fn row_center(count: usize, index: usize) -> f64 {
    (count - index - 1) as f64
}

/// The whisker line plus its two end caps
fn whisker_elements(
    summary: &FiveNumberSummary,
    y: f64,
    style: ShapeStyle,
) -> Vec<PathElement<(f64, f64)>> {
    vec![
        PathElement::new(vec![(summary.min, y), (summary.max, y)], style),
        PathElement::new(
            vec![(summary.min, y - CAP_HALF_HEIGHT), (summary.min, y + CAP_HALF_HEIGHT)],
            style,
        ),
        PathElement::new(
            vec![(summary.max, y - CAP_HALF_HEIGHT), (summary.max, y + CAP_HALF_HEIGHT)],
            style,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_center_puts_first_course_on_top() {
        // Three rows occupy y = 2, 1, 0 from first to last.
        assert!((row_center(3, 0) - 2.0).abs() < f64::EPSILON);
        assert!((row_center(3, 1) - 1.0).abs() < f64::EPSILON);
        assert!((row_center(3, 2) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_whisker_has_line_and_two_caps() {
        let summary = FiveNumberSummary::from_grades(&[0.5, 0.9, 1.3]).expect("summary");

        let elements = whisker_elements(&summary, 0.0, ShapeStyle::from(&BLUE));

        assert_eq!(elements.len(), 3);
    }
}
