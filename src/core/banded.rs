//! Builds the "1-4-1" interpolation system for the interior control points of a
//! clamped uniform cubic B-spline.
//!
//! With the end control points fixed to the first and last interpolation points,
//! every interior on-curve point satisfies `6 S_i = B_{i-1} + 4 B_i + B_{i+1}`.
//! Moving the known `B_0` and `B_{n-1}` to the right-hand side leaves an
//! `(n-2) x (n-2)` tridiagonal system in the unknown interior control points.

use ndarray::{Array1, Array2};

use crate::core::point::Point;
use crate::error::{require_points, Result};

/// Minimum number of interpolation points for a non-degenerate banded system.
pub const MIN_BANDED_POINTS: usize = 4;

/// Builds the `(n-2) x (n-2)` coefficient matrix: 4 on the diagonal, 1 on the
/// first off-diagonals, 0 elsewhere.
///
/// For `n < 2` the result is an empty `0 x 0` matrix.
pub fn build_coefficient_matrix(n: usize) -> Array2<f64> {
    let dim = n.saturating_sub(2);
    Array2::from_shape_fn((dim, dim), |(i, j)| {
        if i == j {
            4.0
        } else if i.abs_diff(j) == 1 {
            1.0
        } else {
            0.0
        }
    })
}

/// Returns the three bands `(lower, diag, upper)` of the same matrix for use with
/// [`solve_tridiagonal`](crate::core::linalg::solve_tridiagonal).
pub fn build_coefficient_bands(n: usize) -> (Array1<f64>, Array1<f64>, Array1<f64>) {
    let dim = n.saturating_sub(2);
    let off = dim.saturating_sub(1);
    (
        Array1::from_elem(off, 1.0),
        Array1::from_elem(dim, 4.0),
        Array1::from_elem(off, 1.0),
    )
}

/// Builds the right-hand-side vectors `(x, y)` for the interior system.
///
/// Entry `k` corresponds to interpolation point `k + 1` and equals six times its
/// coordinate. The first entry additionally subtracts `points[0]` and the last
/// entry subtracts `points[n-1]`, folding in the fixed end control points.
///
/// # Arguments
/// * `points` - Interpolation points, at least [`MIN_BANDED_POINTS`] of them.
///
/// # Returns
/// Two vectors of length `n - 2`, or `InsufficientPoints`.
pub fn build_rhs(points: &[Point]) -> Result<(Array1<f64>, Array1<f64>)> {
    require_points("banded system", MIN_BANDED_POINTS, points.len())?;
    Ok((rhs_axis(points, |p| p.x), rhs_axis(points, |p| p.y)))
}

fn rhs_axis(points: &[Point], coord: impl Fn(&Point) -> f64) -> Array1<f64> {
    let n = points.len();
    let mut rhs: Array1<f64> = points[1..n - 1].iter().map(|p| 6.0 * coord(p)).collect();
    let last = rhs.len() - 1;
    rhs[0] -= coord(&points[0]);
    rhs[last] -= coord(&points[n - 1]);
    rhs
}
