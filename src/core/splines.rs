use crate::core::point::{BezierSegment, ControlPolygon, CurveRepresentation, Point};
use crate::error::{require_points, Result};

/// Minimum control polygon length for forward evaluation.
pub const MIN_FORWARD_POINTS: usize = 2;

/// Converts a clamped uniform cubic B-spline control polygon into Bezier segments.
///
/// For control points `B_0 .. B_{n-1}` the curve starts at `B_0`. Segment `i`
/// (for `i = 1 .. n-2`) uses the handles at one and two thirds along the edge
/// `B_{i-1} B_i` and ends at the blended point
/// `S_i = B_{i-1}/6 + 2 B_i/3 + B_{i+1}/6`. The final segment uses the thirds of
/// the last edge and ends exactly on `B_{n-1}`.
///
/// # Arguments
/// * `polygon` - Control polygon with at least [`MIN_FORWARD_POINTS`] points.
///
/// # Returns
/// A curve of `n - 1` segments, or `InsufficientPoints`.
pub fn evaluate(polygon: &[Point]) -> Result<CurveRepresentation> {
    require_points("forward evaluation", MIN_FORWARD_POINTS, polygon.len())?;

    let n = polygon.len();
    let mut segments = Vec::with_capacity(n - 1);

    for window in polygon.windows(3) {
        let (prev, curr, next) = (window[0], window[1], window[2]);
        let (handle1, handle2) = edge_thirds(prev, curr);
        segments.push(BezierSegment {
            handle1,
            handle2,
            end: blend(prev, curr, next),
        });
    }

    // Clamped end: the last segment lands on the last control point.
    let (handle1, handle2) = edge_thirds(polygon[n - 2], polygon[n - 1]);
    segments.push(BezierSegment {
        handle1,
        handle2,
        end: polygon[n - 1],
    });

    Ok(CurveRepresentation {
        start: polygon[0],
        segments,
    })
}

/// On-curve points of the evaluated polygon, i.e. `evaluate(polygon)?.anchors()`.
pub fn anchor_points(polygon: &[Point]) -> Result<ControlPolygon> {
    Ok(evaluate(polygon)?.anchors())
}

/// Points at one third and two thirds along `a -> b`.
fn edge_thirds(a: Point, b: Point) -> (Point, Point) {
    (
        a * (2.0 / 3.0) + b * (1.0 / 3.0),
        a * (1.0 / 3.0) + b * (2.0 / 3.0),
    )
}

fn blend(prev: Point, curr: Point, next: Point) -> Point {
    prev / 6.0 + curr * (2.0 / 3.0) + next / 6.0
}
