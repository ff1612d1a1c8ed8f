use ndarray::Array1;

use crate::core::banded::{
    build_coefficient_bands, build_coefficient_matrix, build_rhs, MIN_BANDED_POINTS,
};
use crate::core::linalg::{invert, multiply, solve_tridiagonal};
use crate::core::point::{ControlPolygon, Point};
use crate::error::{require_points, CurveError, Result};

/// Minimum number of interpolation points for the exact reverse fit.
pub const MIN_EXACT_FIT_POINTS: usize = MIN_BANDED_POINTS;

/// How the interior banded system is solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveStrategy {
    /// Dense Gauss-Jordan inverse followed by two matrix-vector products. O(n^3).
    #[default]
    DenseInverse,
    /// Thomas algorithm on the three bands. O(n).
    Tridiagonal,
}

/// Recovers the control polygon whose forward evaluation passes through `points`.
///
/// Equivalent to [`fit_with`] using [`SolveStrategy::DenseInverse`].
pub fn fit(points: &[Point]) -> Result<ControlPolygon> {
    fit_with(points, SolveStrategy::DenseInverse)
}

/// Solves the reverse B-spline problem for the given interpolation points.
///
/// The first and last points become the end control points. The interior control
/// points are the solution of the "1-4-1" system from [`crate::core::banded`],
/// one solve per coordinate axis.
///
/// # Arguments
/// * `points` - At least [`MIN_EXACT_FIT_POINTS`] points the curve should pass through.
/// * `strategy` - Solver used for the interior system.
///
/// # Returns
/// The full control polygon (`points.len()` entries), `InsufficientPoints` for
/// short input, or any error propagated from the linear solver.
pub fn fit_with(points: &[Point], strategy: SolveStrategy) -> Result<ControlPolygon> {
    // --- 1. Input Validation ---
    require_points("exact reverse fit", MIN_EXACT_FIT_POINTS, points.len())?;
    let n = points.len();

    // --- 2. Right-hand sides ---
    let (rhs_x, rhs_y) = build_rhs(points)?;

    // --- 3. Interior solve ---
    log::debug!(
        "Solving {0}x{0} banded system for {1} interpolation points ({2:?})",
        n - 2,
        n,
        strategy
    );
    let (bx, by) = match strategy {
        SolveStrategy::DenseInverse => {
            let inverse = invert(&build_coefficient_matrix(n))?;
            (multiply(&inverse, &rhs_x)?, multiply(&inverse, &rhs_y)?)
        }
        SolveStrategy::Tridiagonal => {
            let (lower, diag, upper) = build_coefficient_bands(n);
            (
                solve_tridiagonal(&lower, &diag, &upper, &rhs_x)?,
                solve_tridiagonal(&lower, &diag, &upper, &rhs_y)?,
            )
        }
    };

    // --- 4. Reassemble with the fixed end points ---
    assemble(points[0], &bx, &by, points[n - 1])
}

fn assemble(
    first: Point,
    bx: &Array1<f64>,
    by: &Array1<f64>,
    last: Point,
) -> Result<ControlPolygon> {
    if bx.len() != by.len() {
        return Err(CurveError::DimensionMismatch {
            operation: "assemble control polygon",
            expected: bx.len(),
            found: by.len(),
        });
    }
    let mut polygon = Vec::with_capacity(bx.len() + 2);
    polygon.push(first);
    polygon.extend(bx.iter().zip(by.iter()).map(|(&x, &y)| Point::new(x, y)));
    polygon.push(last);
    Ok(polygon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::splines::{anchor_points, evaluate};

    const TOL_FIT: f64 = 1e-8;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    fn assert_points_eq_tol(a: &[Point], b: &[Point], tol: f64) {
        assert_eq!(a.len(), b.len(), "Lengths differ. Left: {:?}, Right: {:?}", a, b);
        for (i, (pa, pb)) in a.iter().zip(b.iter()).enumerate() {
            assert!(pa.distance(*pb) < tol, "Mismatch at index {}: {:?} vs {:?} (tol {})", i, pa, pb, tol);
        }
    }

    fn sample_input() -> Vec<Point> {
        pts(&[
            (10.0, 180.0),
            (50.0, 60.0),
            (185.0, 180.0),
            (280.0, 200.0),
            (360.0, 80.0),
            (350.0, 255.0),
            (200.0, 320.0),
            (130.0, 240.0),
            (60.0, 290.0),
            (10.0, 200.0),
        ])
    }

    #[test]
    fn test_fit_curve_passes_through_points() {
        let points = sample_input();
        let polygon = fit(&points).unwrap();
        assert_eq!(polygon.len(), points.len());
        assert_eq!(polygon[0], points[0]);
        assert_eq!(polygon[points.len() - 1], points[points.len() - 1]);

        let anchors = anchor_points(&polygon).unwrap();
        assert_points_eq_tol(&anchors, &points, TOL_FIT);
    }

    #[test]
    fn test_fit_round_trip_from_control_polygon() {
        let polygon = pts(&[(0.0, 0.0), (30.0, 80.0), (90.0, 10.0), (140.0, 70.0), (200.0, 5.0)]);
        let anchors = anchor_points(&polygon).unwrap();

        let recovered = fit(&anchors).unwrap();
        assert_points_eq_tol(&recovered, &polygon, TOL_FIT);

        let again = evaluate(&recovered).unwrap().anchors();
        assert_points_eq_tol(&again, &anchors, TOL_FIT);
    }

    #[test]
    fn test_fit_four_points() {
        // Single 2x2 interior system: [[4,1],[1,4]] b = [6*1 - 0, 6*2 - 3]
        let points = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let polygon = fit(&points).unwrap();
        assert_points_eq_tol(&polygon, &points, TOL_FIT);
    }

    #[test]
    fn test_fit_strategies_agree() {
        let points = sample_input();
        let dense = fit_with(&points, SolveStrategy::DenseInverse).unwrap();
        let banded = fit_with(&points, SolveStrategy::Tridiagonal).unwrap();
        assert_points_eq_tol(&dense, &banded, TOL_FIT);
    }

    #[test]
    fn test_fit_too_few_points() {
        let points = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        for strategy in [SolveStrategy::DenseInverse, SolveStrategy::Tridiagonal] {
            assert_eq!(
                fit_with(&points, strategy),
                Err(CurveError::InsufficientPoints {
                    operation: "exact reverse fit",
                    required: 4,
                    found: 3
                })
            );
        }
    }

    #[test]
    fn test_default_strategy_is_dense() {
        assert_eq!(SolveStrategy::default(), SolveStrategy::DenseInverse);
    }
}
