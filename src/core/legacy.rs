//! Closed-form local approximation of the reverse B-spline fit.
//!
//! Instead of solving the full banded system, each control point is taken from
//! the rows of the inverse of the 3x3 "1-4-1" matrix,
//! `(1/56) [[15, -4, 1], [-4, 16, -4], [1, -4, 15]]`, applied to locally
//! boundary-corrected terms `6 P_j - P_outward`. Coupling beyond two neighbours
//! is ignored, so the result only approximates [`crate::core::solver_interface::fit`]
//! for longer sequences. For exactly five points the window covers the whole
//! system and both fits coincide.

use crate::core::point::{ControlPolygon, Point};
use crate::error::{require_points, Result};

/// The stencil reads fixed five-point windows at both ends.
pub const MIN_LEGACY_POINTS: usize = 5;

/// Approximates the control polygon whose forward evaluation passes through `points`.
///
/// - `B_0 = P_0`, `B_{n-1} = P_{n-1}`
/// - `B_1 = [15 (6 P_1 - P_0) - 24 P_2 + (6 P_3 - P_4)] / 56`
/// - `B_i = [-4 (6 P_{i-1} - P_{i-2}) + 96 P_i - 4 (6 P_{i+1} - P_{i+2})] / 56` for `i = 2 .. n-3`
/// - `B_{n-2} = [(6 P_{n-4} - P_{n-5}) - 24 P_{n-3} + 15 (6 P_{n-2} - P_{n-1})] / 56`
///
/// Fails with `InsufficientPoints` when fewer than [`MIN_LEGACY_POINTS`] are given.
pub fn fit_approximate(points: &[Point]) -> Result<ControlPolygon> {
    require_points("legacy reverse fit", MIN_LEGACY_POINTS, points.len())?;
    let p = points;
    let n = p.len();

    // 6 P_j corrected by its outward neighbour.
    let corrected = |j: usize, outward: usize| p[j] * 6.0 - p[outward];

    let mut polygon = Vec::with_capacity(n);
    polygon.push(p[0]);

    polygon.push((corrected(1, 0) * 15.0 - p[2] * 24.0 + corrected(3, 4)) / 56.0);

    for i in 2..n - 2 {
        let b = corrected(i - 1, i - 2) * -4.0 + p[i] * 96.0 - corrected(i + 1, i + 2) * 4.0;
        polygon.push(b / 56.0);
    }

    polygon.push(
        (corrected(n - 4, n - 5) - p[n - 3] * 24.0 + corrected(n - 2, n - 1) * 15.0) / 56.0,
    );

    polygon.push(p[n - 1]);
    Ok(polygon)
}
