use ndarray::{Array1, Array2};

use crate::error::{CurveError, Result};

/// Computes the inverse of a square matrix by Gauss-Jordan elimination.
///
/// The matrix is augmented with the identity. For each pivot column a zero
/// diagonal entry is replaced by swapping in the first lower row with a non-zero
/// entry in that column; the pivot row is then normalised and the column is
/// eliminated from every other row. Only simple row swaps are performed, which is
/// adequate for the small diagonally dominant systems built in `banded`.
///
/// # Arguments
/// * `matrix` - Square matrix to invert. It is copied and never modified.
///
/// # Returns
/// The inverse matrix, `DimensionMismatch` if `matrix` is not square, or
/// `SingularMatrix` if some column has no non-zero pivot candidate.
pub fn invert(matrix: &Array2<f64>) -> Result<Array2<f64>> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(CurveError::DimensionMismatch {
            operation: "invert",
            expected: rows,
            found: cols,
        });
    }

    let dim = rows;
    let mut work = matrix.clone();
    let mut inverse = Array2::<f64>::eye(dim);

    for i in 0..dim {
        if work[[i, i]] == 0.0 {
            let swap_with = (i + 1..dim).find(|&r| work[[r, i]] != 0.0);
            match swap_with {
                Some(r) => {
                    log::trace!("invert: swapping rows {} and {} for pivot column {}", i, r, i);
                    swap_rows(&mut work, i, r);
                    swap_rows(&mut inverse, i, r);
                }
                None => return Err(CurveError::SingularMatrix { column: i }),
            }
        }

        // Scale the pivot row so the diagonal becomes 1.
        let pivot = work[[i, i]];
        work.row_mut(i).mapv_inplace(|v| v / pivot);
        inverse.row_mut(i).mapv_inplace(|v| v / pivot);

        // Rows other than `i` never modify the pivot row, so a single copy suffices.
        let pivot_row = work.row(i).to_owned();
        let pivot_inverse_row = inverse.row(i).to_owned();
        for r in 0..dim {
            if r == i {
                continue;
            }
            let factor = work[[r, i]];
            if factor == 0.0 {
                continue;
            }
            work.row_mut(r).scaled_add(-factor, &pivot_row);
            inverse.row_mut(r).scaled_add(-factor, &pivot_inverse_row);
        }
    }

    Ok(inverse)
}

fn swap_rows(matrix: &mut Array2<f64>, a: usize, b: usize) {
    for j in 0..matrix.ncols() {
        matrix.swap([a, j], [b, j]);
    }
}

/// Matrix-vector product `matrix * vector`.
///
/// Fails with `DimensionMismatch` when the column count of `matrix` differs from
/// the length of `vector`.
pub fn multiply(matrix: &Array2<f64>, vector: &Array1<f64>) -> Result<Array1<f64>> {
    if matrix.ncols() != vector.len() {
        return Err(CurveError::DimensionMismatch {
            operation: "multiply",
            expected: matrix.ncols(),
            found: vector.len(),
        });
    }
    Ok(matrix.dot(vector))
}

/// Solves a tridiagonal system with the Thomas algorithm in O(n).
///
/// # Arguments
/// * `lower` - Sub-diagonal, length `n - 1` (`lower[i]` sits in row `i + 1`).
/// * `diag` - Main diagonal, length `n`.
/// * `upper` - Super-diagonal, length `n - 1` (`upper[i]` sits in row `i`).
/// * `rhs` - Right-hand side, length `n`.
///
/// # Returns
/// The solution vector. No pivoting is done, so a vanishing modified pivot is
/// reported as `SingularMatrix` even when a row swap could have rescued it.
pub fn solve_tridiagonal(
    lower: &Array1<f64>,
    diag: &Array1<f64>,
    upper: &Array1<f64>,
    rhs: &Array1<f64>,
) -> Result<Array1<f64>> {
    let n = diag.len();
    if rhs.len() != n {
        return Err(CurveError::DimensionMismatch {
            operation: "solve_tridiagonal",
            expected: n,
            found: rhs.len(),
        });
    }
    let band = n.saturating_sub(1);
    for found in [lower.len(), upper.len()] {
        if found != band {
            return Err(CurveError::DimensionMismatch {
                operation: "solve_tridiagonal",
                expected: band,
                found,
            });
        }
    }
    if n == 0 {
        return Ok(Array1::zeros(0));
    }

    // Forward sweep: c' holds the modified super-diagonal, d' the modified rhs.
    let mut c_prime = Array1::<f64>::zeros(band);
    let mut d_prime = Array1::<f64>::zeros(n);

    let mut denom = diag[0];
    if denom == 0.0 {
        return Err(CurveError::SingularMatrix { column: 0 });
    }
    if band > 0 {
        c_prime[0] = upper[0] / denom;
    }
    d_prime[0] = rhs[0] / denom;

    for i in 1..n {
        denom = diag[i] - lower[i - 1] * c_prime[i - 1];
        if denom == 0.0 {
            return Err(CurveError::SingularMatrix { column: i });
        }
        if i < band {
            c_prime[i] = upper[i] / denom;
        }
        d_prime[i] = (rhs[i] - lower[i - 1] * d_prime[i - 1]) / denom;
    }

    // Back substitution.
    let mut x = d_prime;
    for i in (0..band).rev() {
        x[i] -= c_prime[i] * x[i + 1];
    }
    Ok(x)
}
