//! Smooth curves through 2D point sequences.
//!
//! A point sequence is either treated directly as a clamped uniform cubic
//! B-spline control polygon ([`evaluate`](crate::core::evaluate)) or as points the curve must
//! pass through, in which case the control polygon is recovered first
//! ([`fit`](crate::core::fit), or the local approximation
//! [`fit_approximate`](crate::core::fit_approximate)).
//! The resulting [`CurveRepresentation`](crate::core::CurveRepresentation) is a start point followed by
//! cubic Bezier segments, ready for SVG path output via [`render`].

pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod render;
pub mod scene;

pub use crate::config::{Layer, RenderOptions};
pub use crate::core::{
    evaluate, fit, fit_approximate, fit_with, BezierSegment, ControlPolygon, CurveRepresentation,
    Point, SolveStrategy,
};
pub use crate::error::{CurveError, Result};
pub use crate::input::parse_points;
pub use crate::scene::{render_svg, CurveSet};
