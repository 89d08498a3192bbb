use crate::config::model::{LinesParams, MIN_PITCH_PX};
use crate::foundation::core::{Canvas, Point, Vec2};
use crate::render::primitive::{DrawStyle, PatternPass, Primitive};

/// Parallel strokes at `angle`, `spacing` apart perpendicular to it, centred on the canvas.
///
/// Each line extends one canvas diagonal either side of its offset point, and offsets run past
/// `±diagonal`, so every line crosses the whole canvas at any angle. Spacing below one pixel
/// (or NaN) is treated as one pixel.
pub fn generate(canvas: Canvas, p: &LinesParams) -> PatternPass {
    let spacing = p.spacing.max(MIN_PITCH_PX);
    let diag = canvas.diagonal();
    let a = p.angle.to_radians();
    let dir = Vec2::new(a.cos(), a.sin());
    let perp = Vec2::new(
        (a + std::f64::consts::FRAC_PI_2).cos(),
        (a + std::f64::consts::FRAC_PI_2).sin(),
    );
    let count = (diag / spacing).ceil() as i64 + 2;
    let center = Point::new(canvas.w() / 2.0, canvas.h() / 2.0);

    let mut pass = PatternPass::new(
        p.color,
        p.opacity,
        DrawStyle::stroke(p.thickness),
    );
    for i in -count..=count {
        let o = center + perp * (i as f64 * spacing);
        pass.push(Primitive::Line {
            from: o - dir * diag,
            to: o + dir * diag,
        });
    }
    pass
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/lines.rs"]
mod tests;
