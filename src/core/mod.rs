//! Curve-fitting core: forward B-spline evaluation, exact and approximate
//! reverse fitting, and the linear algebra behind them.

pub mod banded;
pub mod legacy;
pub mod linalg;
pub mod point;
pub mod solver_interface;
pub mod splines;

pub use legacy::fit_approximate;
pub use point::{BezierSegment, ControlPolygon, CurveRepresentation, Point};
pub use solver_interface::{fit, fit_with, SolveStrategy};
pub use splines::evaluate;
