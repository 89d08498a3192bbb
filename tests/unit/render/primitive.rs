use super::*;
use kurbo::PathEl;

#[test]
fn polygon_path_is_closed() {
    let tri = Primitive::Polygon {
        points: vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ],
    };
    let els: Vec<PathEl> = tri.to_path().elements().to_vec();
    assert_eq!(els.len(), 4);
    assert!(matches!(els[0], PathEl::MoveTo(_)));
    assert!(matches!(els[3], PathEl::ClosePath));
}

#[test]
fn polyline_path_is_open() {
    let pl = Primitive::Polyline {
        points: vec![Point::new(0.0, 0.0), Point::new(2.0, 1.0), Point::new(4.0, 0.0)],
    };
    let els = pl.to_path();
    assert_eq!(els.elements().len(), 3);
    assert!(!matches!(els.elements().last(), Some(PathEl::ClosePath)));
}

#[test]
fn circle_path_bounds_match_radius() {
    let c = Primitive::Circle {
        center: Point::new(50.0, 40.0),
        radius: 10.0,
    };
    let bb = c.to_path().bounding_box();
    assert!((bb.x0 - 40.0).abs() < 0.2 && (bb.x1 - 60.0).abs() < 0.2);
    assert!((bb.y0 - 30.0).abs() < 0.2 && (bb.y1 - 50.0).abs() < 0.2);
}

#[test]
fn unusable_stroke_widths_fall_back_to_one_pixel() {
    assert_eq!(DrawStyle::stroke(2.5), DrawStyle::Stroke { width: 2.5 });
    for w in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        assert_eq!(DrawStyle::stroke(w), DrawStyle::Stroke { width: 1.0 }, "width {w}");
    }
}

#[test]
fn pass_visibility_requires_opacity_and_primitives() {
    let mut pass = PatternPass::new(Rgb8::WHITE, 0.5, DrawStyle::stroke(0.0));
    assert!(!pass.is_visible());
    pass.push(Primitive::Line {
        from: Point::new(0.0, 0.0),
        to: Point::new(1.0, 1.0),
    });
    assert!(pass.is_visible());
    pass.opacity = 0.0;
    assert!(!pass.is_visible());
}
