use super::*;
use crate::config::model::GradientConfig;
use crate::foundation::core::Rgb8;
use crate::render::primitive::Primitive;

fn solid_gradient(color: Rgb8) -> GradientDesc {
    let cfg = GradientConfig {
        colors: [color, color, color],
        ..GradientConfig::default()
    };
    GradientDesc::resolve(&cfg, Canvas::new(1, 1))
}

fn backend(w: u32, h: u32, bg: Rgb8) -> CpuBackend {
    let mut b = CpuBackend::new();
    b.resize(Canvas::new(w, h)).unwrap();
    b.fill_gradient(&solid_gradient(bg)).unwrap();
    b
}

#[test]
fn resize_discards_previous_content() {
    let mut b = backend(4, 4, Rgb8::WHITE);
    b.resize(Canvas::new(2, 3)).unwrap();
    let f = b.frame();
    assert_eq!((f.width, f.height), (2, 3));
    assert!(f.data.iter().all(|&v| v == 0));
}

#[test]
fn oversized_surface_is_a_render_error() {
    let mut b = CpuBackend::new();
    let err = b.resize(Canvas::new(70_000, 10)).unwrap_err();
    assert!(matches!(err, BgError::Render(_)));
}

#[test]
fn gradient_fill_is_opaque() {
    let b = backend(3, 2, Rgb8::new(10, 20, 30));
    let f = b.frame();
    assert!(f.data.chunks_exact(4).all(|px| px == [10, 20, 30, 255]));
}

#[test]
fn horizontal_ramp_increases_left_to_right() {
    let cfg = GradientConfig {
        colors: [Rgb8::new(0, 0, 0), Rgb8::WHITE, Rgb8::WHITE],
        angle: 0.0,
        ..GradientConfig::default()
    };
    let canvas = Canvas::new(16, 2);
    let mut b = CpuBackend::new();
    b.resize(canvas).unwrap();
    b.fill_gradient(&GradientDesc::resolve(&cfg, canvas)).unwrap();
    let f = b.frame();
    let row: Vec<u8> = (0..16).map(|x| f.pixel(x, 0).unwrap()[0]).collect();
    assert!(row.windows(2).all(|p| p[0] <= p[1]));
    assert!(row[0] < 16 && row[15] > 239);
}

#[test]
fn opaque_fill_pass_covers_centre() {
    let mut b = backend(32, 32, Rgb8::new(0, 0, 0));
    let mut pass = PatternPass::new(Rgb8::new(255, 0, 0), 1.0, DrawStyle::Fill);
    pass.push(Primitive::Circle {
        center: Point::new(16.0, 16.0),
        radius: 10.0,
    });
    b.draw_pass(&pass).unwrap();
    let f = b.frame();
    assert_eq!(f.pixel(16, 16), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn pass_opacity_scales_coverage() {
    let mut b = backend(16, 16, Rgb8::new(0, 0, 0));
    let mut pass = PatternPass::new(Rgb8::WHITE, 0.5, DrawStyle::Fill);
    pass.push(Primitive::Circle {
        center: Point::new(8.0, 8.0),
        radius: 6.0,
    });
    b.draw_pass(&pass).unwrap();
    let [r, _, _, a] = b.frame().pixel(8, 8).unwrap();
    assert_eq!(a, 255);
    assert!((120..=136).contains(&r), "got {r}");
}

#[test]
fn stroke_pass_leaves_interior_untouched() {
    let mut b = backend(40, 40, Rgb8::new(0, 0, 0));
    let mut pass = PatternPass::new(Rgb8::WHITE, 1.0, DrawStyle::Stroke { width: 2.0 });
    pass.push(Primitive::Polygon {
        points: vec![
            Point::new(5.0, 5.0),
            Point::new(35.0, 5.0),
            Point::new(35.0, 35.0),
            Point::new(5.0, 35.0),
        ],
    });
    b.draw_pass(&pass).unwrap();
    let f = b.frame();
    assert_eq!(f.pixel(20, 20), Some([0, 0, 0, 255]));
    assert_eq!(f.pixel(20, 5).map(|p| p[0] > 100), Some(true));
}

#[test]
fn blur_softens_edges() {
    let mut pass = PatternPass::new(Rgb8::WHITE, 1.0, DrawStyle::Fill);
    pass.push(Primitive::Circle {
        center: Point::new(16.0, 16.0),
        radius: 6.0,
    });

    let mut sharp = backend(32, 32, Rgb8::new(0, 0, 0));
    sharp.draw_pass(&pass).unwrap();
    let mut soft = backend(32, 32, Rgb8::new(0, 0, 0));
    soft.draw_pass(&pass.clone().with_blur(3.0)).unwrap();

    let outside = (16, 25);
    assert_eq!(sharp.frame().pixel(outside.0, outside.1), Some([0, 0, 0, 255]));
    let glow = soft.frame().pixel(outside.0, outside.1).unwrap();
    assert!(glow[0] > 0);
    assert!(soft.frame().pixel(16, 16).unwrap()[0] < 255);
}

#[test]
fn invisible_pass_is_noop() {
    let mut b = backend(8, 8, Rgb8::new(9, 9, 9));
    let before = b.frame();
    let mut pass = PatternPass::new(Rgb8::WHITE, 0.0, DrawStyle::Fill);
    pass.push(Primitive::Circle {
        center: Point::new(4.0, 4.0),
        radius: 4.0,
    });
    b.draw_pass(&pass).unwrap();
    assert_eq!(b.frame(), before);
}
