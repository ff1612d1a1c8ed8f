use smooth_rs::core::splines::anchor_points;
use smooth_rs::render::bezier_path;
use smooth_rs::{
    evaluate, fit, fit_approximate, parse_points, render_svg, CurveError, CurveSet, Point,
    RenderOptions,
};

const TOL: f64 = 1e-8;

#[test]
fn test_parse_fit_render_passes_through_input() {
    let points = parse_points("20 20 80 140 160 40 240 180 320 60 380 200");
    assert_eq!(points.len(), 6);

    let polygon = fit(&points).unwrap();
    let curve = evaluate(&polygon).unwrap();
    for (anchor, p) in curve.anchors().iter().zip(points.iter()) {
        assert!(anchor.distance(*p) < TOL, "{:?} vs {:?}", anchor, p);
    }

    let d = bezier_path(&curve);
    assert!(d.starts_with("M 20 20 C "));
    assert!(d.ends_with(" 380 200"));
}

#[test]
fn test_round_trip_through_anchor_map() {
    let polygon = vec![
        Point::new(5.0, 5.0),
        Point::new(60.0, 120.0),
        Point::new(130.0, 20.0),
        Point::new(210.0, 160.0),
        Point::new(260.0, 40.0),
        Point::new(330.0, 90.0),
    ];
    let anchors = anchor_points(&polygon).unwrap();
    let recovered_anchors = anchor_points(&fit(&anchors).unwrap()).unwrap();
    for (a, b) in recovered_anchors.iter().zip(anchors.iter()) {
        assert!(a.distance(*b) < TOL);
    }
}

#[test]
fn test_minimum_lengths_are_reported() {
    let three = parse_points("0 0 5 5 10 0");
    assert!(evaluate(&three).is_ok());
    assert!(matches!(fit(&three), Err(CurveError::InsufficientPoints { required: 4, .. })));
    assert!(matches!(
        fit_approximate(&three),
        Err(CurveError::InsufficientPoints { required: 5, .. })
    ));
}

#[test]
fn test_recomputation_is_idempotent() {
    let points = parse_points(smooth_rs::config::DEFAULT_INPUT);
    let options = RenderOptions::default();
    let first = render_svg(&CurveSet::compute(&points), &options);
    let second = render_svg(&CurveSet::compute(&points), &options);
    assert_eq!(first, second);
}
