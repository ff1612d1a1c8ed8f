//! Value types shared by the forward and reverse spline computations.

use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Control points of a B-spline. Not generally on the curve.
pub type ControlPolygon = Vec<Point>;

/// One cubic Bezier piece. Its start point is the end of the previous segment
/// (or the curve's start anchor for the first segment).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub handle1: Point,
    pub handle2: Point,
    pub end: Point,
}

/// A piecewise cubic curve: one start anchor followed by `n - 1` Bezier segments
/// for an `n`-point control polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRepresentation {
    pub start: Point,
    pub segments: Vec<BezierSegment>,
}

impl CurveRepresentation {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Points the curve passes through: the start anchor and each segment's end.
    pub fn anchors(&self) -> Vec<Point> {
        std::iter::once(self.start)
            .chain(self.segments.iter().map(|s| s.end))
            .collect()
    }

    /// The final on-curve point.
    pub fn end(&self) -> Point {
        self.segments.last().map_or(self.start, |s| s.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -4.0);
        assert_eq!(a + b, Point::new(4.0, -2.0));
        assert_eq!(b - a, Point::new(2.0, -6.0));
        assert_eq!(a * 6.0, Point::new(6.0, 12.0));
        assert_eq!(b / 2.0, Point::new(1.5, -2.0));
        assert_eq!(Point::from([1.0, 2.0]), a);
        assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_curve_anchors_and_end() {
        let seg = |x: f64| BezierSegment {
            handle1: Point::new(x - 0.5, 0.0),
            handle2: Point::new(x - 0.25, 0.0),
            end: Point::new(x, 0.0),
        };
        let curve = CurveRepresentation {
            start: Point::new(0.0, 0.0),
            segments: vec![seg(1.0), seg(2.0)],
        };
        assert_eq!(curve.segment_count(), 2);
        assert_eq!(
            curve.anchors(),
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)]
        );
        assert_eq!(curve.end(), Point::new(2.0, 0.0));
    }
}
