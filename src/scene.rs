//! Runs the fitting pipeline on one input sequence and composes the SVG scene.

use std::fmt::Write;

use crate::config::{Layer, RenderOptions};
use crate::core::legacy::fit_approximate;
use crate::core::point::{ControlPolygon, CurveRepresentation, Point};
use crate::core::solver_interface::fit;
use crate::core::splines::evaluate;
use crate::error::Result;
use crate::render::{bezier_path, circle, midpoints, path_element, polyline_path, third_points};

/// Every curve derived from one input sequence.
///
/// Each field is computed independently, so a sequence too short for one fit
/// still yields the others.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    pub points: Vec<Point>,
    /// The input used directly as a control polygon.
    pub b_spline: Result<CurveRepresentation>,
    pub smooth_polygon: Result<ControlPolygon>,
    /// Curve through the input, from the exact fit.
    pub smooth: Result<CurveRepresentation>,
    pub legacy_polygon: Result<ControlPolygon>,
    /// Curve from the legacy approximate fit.
    pub legacy: Result<CurveRepresentation>,
}

impl CurveSet {
    pub fn compute(points: &[Point]) -> Self {
        let smooth_polygon = fit(points);
        let smooth = smooth_polygon.as_ref().map_err(Clone::clone).and_then(|p| evaluate(p));
        let legacy_polygon = fit_approximate(points);
        let legacy = legacy_polygon.as_ref().map_err(Clone::clone).and_then(|p| evaluate(p));

        Self {
            points: points.to_vec(),
            b_spline: evaluate(points),
            smooth_polygon,
            smooth,
            legacy_polygon,
            legacy,
        }
    }
}

fn visible_curve<'a>(
    curve: &'a Result<CurveRepresentation>,
    layer: Layer,
    options: &RenderOptions,
) -> Option<&'a CurveRepresentation> {
    if !options.is_visible(layer) {
        return None;
    }
    match curve {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("Skipping layer {}: {}", layer, e);
            None
        }
    }
}

/// Renders the scene as a standalone SVG document.
///
/// Paths are drawn first (polyline, B-spline, smooth, legacy), then markers, with
/// the input points on top.
pub fn render_svg(curves: &CurveSet, options: &RenderOptions) -> String {
    let mut elements: Vec<String> = Vec::new();
    let points = &curves.points;

    let b_spline = visible_curve(&curves.b_spline, Layer::BSpline, options);
    let smooth = visible_curve(&curves.smooth, Layer::Smooth, options);
    let legacy = visible_curve(&curves.legacy, Layer::OldSmooth, options);

    if options.is_visible(Layer::Line) && !points.is_empty() {
        elements.push(path_element(&polyline_path(points), "black"));
    }
    if let Some(c) = b_spline {
        elements.push(path_element(&bezier_path(c), "gray"));
    }
    if let Some(c) = smooth {
        elements.push(path_element(&bezier_path(c), "blue"));
    }
    if let Some(c) = legacy {
        elements.push(path_element(&bezier_path(c), "cyan"));
    }

    if options.is_visible(Layer::MidPoints) {
        elements.extend(midpoints(points).into_iter().map(|p| circle(p, 4.0, "purple")));
    }
    if options.is_visible(Layer::ThirdPoints) {
        elements.extend(third_points(points).into_iter().map(|p| circle(p, 3.0, "green")));
    }

    if let Some(c) = b_spline {
        elements.push(circle(c.start, 3.0, "cyan"));
        for s in &c.segments {
            elements.push(circle(s.handle1, 2.0, "cyan"));
            elements.push(circle(s.handle2, 2.0, "cyan"));
            elements.push(circle(s.end, 3.0, "cyan"));
        }
    }
    if let Some(c) = smooth {
        elements.extend(c.anchors().into_iter().map(|p| circle(p, 4.0, "blue")));
    }
    if let Some(c) = legacy {
        elements.extend(c.anchors().into_iter().map(|p| circle(p, 4.0, "cyan")));
    }

    if options.is_visible(Layer::Points) {
        elements.extend(points.iter().map(|&p| circle(p, 4.0, "red")));
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{1}" viewBox="0 0 {0} {1}">"#,
        options.width, options.height
    );
    for e in elements {
        let _ = writeln!(out, "  {}", e);
    }
    out.push_str("</svg>\n");
    out
}
