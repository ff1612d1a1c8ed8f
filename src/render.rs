//! SVG path data and marker positions.

use std::fmt::Write;

use crate::core::point::{CurveRepresentation, Point};

/// `M x0 y0 L x1 y1 ...` through every point; empty input gives an empty string.
pub fn polyline_path(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let command = if i == 0 { 'M' } else { 'L' };
        // Writing to a String cannot fail.
        let _ = write!(out, "{} {} {}", command, p.x, p.y);
    }
    out
}

/// `M sx sy C h1x h1y h2x h2y ex ey ...` for a curve representation.
pub fn bezier_path(curve: &CurveRepresentation) -> String {
    let mut out = format!("M {} {}", curve.start.x, curve.start.y);
    for s in &curve.segments {
        let _ = write!(
            out,
            " C {} {} {} {} {} {}",
            s.handle1.x, s.handle1.y, s.handle2.x, s.handle2.y, s.end.x, s.end.y
        );
    }
    out
}

/// Midpoints of consecutive point pairs.
pub fn midpoints(points: &[Point]) -> Vec<Point> {
    points.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
}

/// The one-third and two-thirds points of every edge, nearer point first.
pub fn third_points(points: &[Point]) -> Vec<Point> {
    points
        .windows(2)
        .flat_map(|w| {
            [
                (w[0] * 2.0 + w[1]) / 3.0,
                (w[0] + w[1] * 2.0) / 3.0,
            ]
        })
        .collect()
}

/// An SVG `<circle>` element.
pub fn circle(center: Point, radius: f64, fill: &str) -> String {
    format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}" />"#,
        center.x, center.y, radius, fill
    )
}

/// An unfilled SVG `<path>` element.
pub fn path_element(d: &str, stroke: &str) -> String {
    format!(r#"<path d="{}" fill-opacity="0" stroke="{}" />"#, d, stroke)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::splines::evaluate;

    #[test]
    fn test_polyline_path() {
        let points = vec![Point::new(10.0, 180.0), Point::new(50.0, 60.0), Point::new(0.5, 2.0)];
        assert_eq!(polyline_path(&points), "M 10 180 L 50 60 L 0.5 2");
        assert_eq!(polyline_path(&[]), "");
    }

    #[test]
    fn test_bezier_path_two_points() {
        let curve = evaluate(&[Point::new(0.0, 0.0), Point::new(3.0, 6.0)]).unwrap();
        assert_eq!(bezier_path(&curve), "M 0 0 C 1 2 2 4 3 6");
    }

    #[test]
    fn test_bezier_path_has_one_command_per_segment() {
        let polygon = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let d = bezier_path(&evaluate(&polygon).unwrap());
        assert!(d.starts_with("M 0 0 C "));
        assert!(d.ends_with(" 0 10"));
        assert_eq!(d.matches('C').count(), 3);
    }

    #[test]
    fn test_midpoints_and_third_points() {
        let points = vec![Point::new(0.0, 0.0), Point::new(6.0, 3.0), Point::new(6.0, 9.0)];
        assert_eq!(midpoints(&points), vec![Point::new(3.0, 1.5), Point::new(6.0, 6.0)]);
        assert_eq!(
            third_points(&points),
            vec![
                Point::new(2.0, 1.0),
                Point::new(4.0, 2.0),
                Point::new(6.0, 5.0),
                Point::new(6.0, 7.0),
            ]
        );
        assert!(midpoints(&points[..1]).is_empty());
    }

    #[test]
    fn test_elements() {
        assert_eq!(
            circle(Point::new(1.0, 2.5), 4.0, "red"),
            r#"<circle cx="1" cy="2.5" r="4" fill="red" />"#
        );
        assert_eq!(
            path_element("M 0 0", "black"),
            r#"<path d="M 0 0" fill-opacity="0" stroke="black" />"#
        );
    }
}
