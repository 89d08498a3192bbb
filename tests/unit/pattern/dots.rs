use super::*;

#[test]
fn grid_starts_at_half_spacing_and_stays_inside() {
    let p = DotsParams {
        spacing: 30.0,
        ..DotsParams::default()
    };
    let pass = generate(Canvas::new(100, 60), &p);
    let centers: Vec<Point> = pass
        .primitives
        .iter()
        .map(|prim| match prim {
            Primitive::Circle { center, .. } => *center,
            other => panic!("expected circle, got {other:?}"),
        })
        .collect();
    // x: 15, 45, 75; y: 15, 45.
    assert_eq!(centers.len(), 6);
    assert_eq!(centers[0], Point::new(15.0, 15.0));
    assert_eq!(centers[1], Point::new(15.0, 45.0));
    assert_eq!(centers[5], Point::new(75.0, 45.0));
}

#[test]
fn spacing_larger_than_canvas_still_draws_one_dot_if_centre_fits() {
    let p = DotsParams {
        spacing: 10.0,
        ..DotsParams::default()
    };
    assert_eq!(generate(Canvas::new(6, 6), &p).primitives.len(), 1);
    assert_eq!(generate(Canvas::new(5, 5), &p).primitives.len(), 0);
}

#[test]
fn radius_comes_from_size() {
    let p = DotsParams {
        size: 4.5,
        ..DotsParams::default()
    };
    let pass = generate(Canvas::new(40, 40), &p);
    assert!(
        pass.primitives
            .iter()
            .all(|prim| matches!(prim, Primitive::Circle { radius, .. } if *radius == 4.5))
    );
}

#[test]
fn sub_pixel_spacing_is_treated_as_one_pixel() {
    let canvas = Canvas::new(5, 4);
    let one = generate(canvas, &DotsParams { spacing: 1.0, ..DotsParams::default() });
    for spacing in [0.0, -2.0, f64::NAN] {
        let p = DotsParams {
            spacing,
            ..DotsParams::default()
        };
        assert_eq!(generate(canvas, &p), one, "spacing {spacing}");
    }
    assert_eq!(one.primitives.len(), 20);
}
