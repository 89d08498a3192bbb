use std::f64::consts::TAU;

use crate::config::model::WavesParams;
use crate::foundation::core::{Canvas, Point};
use crate::render::primitive::{DrawStyle, PatternPass, Primitive};

/// Horizontal sampling step in pixels.
pub const SAMPLE_STEP: u32 = 2;

/// Sample x positions `0, 2, 4, …`, ending exactly at `width`.
pub fn sample_xs(width: u32) -> Vec<u32> {
    let mut xs: Vec<u32> = (0..=width).step_by(SAMPLE_STEP as usize).collect();
    if xs.last() != Some(&width) {
        xs.push(width);
    }
    xs
}

/// `count` sinusoids at baselines `i · height/(count+1)`.
pub fn generate(canvas: Canvas, p: &WavesParams) -> PatternPass {
    let pitch = canvas.h() / (f64::from(p.count) + 1.0);
    let xs = sample_xs(canvas.width);
    let mut pass = PatternPass::new(
        p.color,
        p.opacity,
        DrawStyle::stroke(p.thickness),
    );
    for i in 1..=p.count {
        let base = pitch * f64::from(i);
        let points = xs
            .iter()
            .map(|&x| {
                let x = f64::from(x);
                let y = base + (x / canvas.w() * TAU * p.frequency).sin() * p.amplitude;
                Point::new(x, y)
            })
            .collect();
        pass.push(Primitive::Polyline { points });
    }
    pass
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/waves.rs"]
mod tests;
