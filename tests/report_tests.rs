//! Integration tests for chart rendering

use grade_stats::models::Course;
use grade_stats::report::render_box_plot;
use tempfile::TempDir;

fn sample_courses() -> Vec<Course> {
    vec![
        Course::new(
            "MATH 151".to_string(),
            vec![0.95, 1.0, 1.0, 1.0, 0.96, 0.99, 1.05, 0.81],
        ),
        Course::new(
            "MATH 152".to_string(),
            vec![1.0667, 1.0, 1.01, 0.98, 0.99, 1.1],
        ),
    ]
}

#[test]
fn renders_png_box_plot() {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("grades.png");

    render_box_plot(&sample_courses(), "Percent Grade", &output, (800, 600))
        .expect("render chart");

    let metadata = std::fs::metadata(&output).expect("output file");
    assert!(metadata.len() > 0, "chart file should not be empty");
}

#[test]
fn renders_svg_box_plot() {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("grades.svg");

    render_box_plot(&sample_courses(), "Percent Grade", &output, (800, 600))
        .expect("render chart");

    let svg = std::fs::read_to_string(&output).expect("output file");
    assert!(svg.contains("<svg"));
    // Category axis carries the course codes.
    assert!(svg.contains("MATH 151"));
    assert!(svg.contains("MATH 152"));
    // Value axis carries the caller-supplied label.
    assert!(svg.contains("Percent Grade"));
}

#[test]
fn renders_chart_with_empty_grades_course() {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("grades.png");

    let mut courses = sample_courses();
    courses.push(Course::new("CHEM 301".to_string(), Vec::new()));

    render_box_plot(&courses, "Percent Grade", &output, (800, 600))
        .expect("empty-grades course must not fail rendering");

    assert!(output.exists());
}

#[test]
fn renders_chart_with_no_courses() {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("empty.png");

    render_box_plot(&[], "Percent Grade", &output, (640, 480)).expect("render empty chart");

    assert!(output.exists());
}
