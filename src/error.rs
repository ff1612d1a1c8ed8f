//! Error type shared by every curve-fitting operation.

use thiserror::Error;

/// Errors raised by the linear solver, the banded system builder and the spline fits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("Dimension mismatch in {operation}: expected {expected}, found {found}.")]
    DimensionMismatch {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Matrix is singular: no non-zero pivot candidate in column {column}.")]
    SingularMatrix { column: usize },

    #[error("{operation} requires at least {required} points, but only {found} were provided.")]
    InsufficientPoints {
        operation: &'static str,
        required: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, CurveError>;

/// Returns `InsufficientPoints` when `found < required`.
pub(crate) fn require_points(operation: &'static str, required: usize, found: usize) -> Result<()> {
    if found < required {
        return Err(CurveError::InsufficientPoints {
            operation,
            required,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_points_boundary() {
        assert!(require_points("fit", 4, 4).is_ok());
        assert_eq!(
            require_points("fit", 4, 3),
            Err(CurveError::InsufficientPoints {
                operation: "fit",
                required: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_error_messages_name_the_operation() {
        let e = CurveError::InsufficientPoints {
            operation: "legacy fit",
            required: 5,
            found: 2,
        };
        assert_eq!(
            e.to_string(),
            "legacy fit requires at least 5 points, but only 2 were provided."
        );
        let e = CurveError::SingularMatrix { column: 1 };
        assert!(e.to_string().contains("column 1"));
    }
}
