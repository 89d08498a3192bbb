use crate::config::model::BubblesParams;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::rng::Mulberry32;
use crate::render::primitive::{DrawStyle, PatternPass, Primitive};

/// Scatter `count` filled circles using a freshly seeded generator.
///
/// Draw order per bubble is x, then y, then radius; changing it changes every seeded layout.
pub fn generate(canvas: Canvas, p: &BubblesParams) -> PatternPass {
    let mut rng = Mulberry32::new(p.seed);
    let mut pass = PatternPass::new(p.color, p.opacity, DrawStyle::Fill).with_blur(p.blur);
    pass.primitives.reserve(p.count as usize);
    for _ in 0..p.count {
        let x = rng.next_f64() * canvas.w();
        let y = rng.next_f64() * canvas.h();
        let radius = rng.range(p.min_radius, p.max_radius);
        pass.push(Primitive::Circle {
            center: Point::new(x, y),
            radius,
        });
    }
    pass
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/bubbles.rs"]
mod tests;
