use crate::config::model::{DotsParams, MIN_PITCH_PX};
use crate::foundation::core::{Canvas, Point};
use crate::render::primitive::{DrawStyle, PatternPass, Primitive};

/// Grid positions `sp/2 + i·sp` strictly inside `[0, extent)`.
fn axis(extent: f64, sp: f64) -> Vec<f64> {
    (0u32..)
        .map(|i| sp / 2.0 + f64::from(i) * sp)
        .take_while(|v| *v < extent)
        .collect()
}

/// Uniform grid of filled circles, first dot centred at `(sp/2, sp/2)`.
///
/// Spacing below one pixel (or NaN) is treated as one pixel.
pub fn generate(canvas: Canvas, p: &DotsParams) -> PatternPass {
    let sp = p.spacing.max(MIN_PITCH_PX);
    let xs = axis(canvas.w(), sp);
    let ys = axis(canvas.h(), sp);
    let mut pass = PatternPass::new(p.color, p.opacity, DrawStyle::Fill);
    pass.primitives.reserve(xs.len() * ys.len());
    for &x in &xs {
        for &y in &ys {
            pass.push(Primitive::Circle {
                center: Point::new(x, y),
                radius: p.size,
            });
        }
    }
    pass
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/dots.rs"]
mod tests;
