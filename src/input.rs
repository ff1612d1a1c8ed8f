//! Text input to point sequence.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::point::Point;

fn number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").expect("digit pattern is a valid regex"))
}

/// Parses free-form text into points.
///
/// Every run of ASCII digits is read as a non-negative integer and consecutive
/// numbers are paired into `(x, y)`. Any other character separates numbers, so
/// signs and decimal points are not understood. An odd trailing number is
/// dropped.
pub fn parse_points(text: &str) -> Vec<Point> {
    let numbers: Vec<f64> = number_pattern()
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();

    numbers
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}
