use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};

use crate::config::model::{HoneycombParams, HoneycombStyle, MIN_PITCH_PX};
use crate::foundation::core::{Canvas, Point};
use crate::render::primitive::{DrawStyle, PatternPass, Primitive};

/// Horizontal distance between adjacent column centres.
pub fn column_pitch(size: f64) -> f64 {
    size * 1.5
}

/// Vertical distance between adjacent row centres.
pub fn row_pitch(size: f64) -> f64 {
    size * 3f64.sqrt()
}

/// Cell centres in drawing order (column-major), including one extra ring of cells beyond every
/// edge. Odd columns shift down by half a row. Sizes below one pixel (or NaN) are treated as one
/// pixel.
pub fn cell_centers(canvas: Canvas, size: f64) -> Vec<Point> {
    let size = size.max(MIN_PITCH_PX);
    let col_w = column_pitch(size);
    let row_h = row_pitch(size);
    let cols = (canvas.w() / col_w).ceil() as i64 + 2;
    let rows = (canvas.h() / row_h).ceil() as i64 + 2;

    let mut out = Vec::with_capacity(((cols + 1) * (rows + 1)).max(0) as usize);
    for col in -1..cols {
        let shift = if col.rem_euclid(2) == 1 { row_h / 2.0 } else { 0.0 };
        for row in -1..rows {
            out.push(Point::new(col as f64 * col_w, row as f64 * row_h + shift));
        }
    }
    out
}

/// Vertices of the hexagon with circumradius `size` around `center`, at `60°·i − 30°`.
pub fn hexagon(center: Point, size: f64) -> Vec<Point> {
    (0..6)
        .map(|i| {
            let a = FRAC_PI_3 * f64::from(i) - FRAC_PI_6;
            Point::new(center.x + size * a.cos(), center.y + size * a.sin())
        })
        .collect()
}

/// Tile the canvas with hexagons, filled or stroked per `style`.
pub fn generate(canvas: Canvas, p: &HoneycombParams) -> PatternPass {
    let style = match p.style {
        HoneycombStyle::Fill => DrawStyle::Fill,
        HoneycombStyle::Stroke => DrawStyle::stroke(p.thickness),
    };
    let mut pass = PatternPass::new(p.color, p.opacity, style);
    let size = p.size.max(MIN_PITCH_PX);
    pass.primitives = cell_centers(canvas, size)
        .into_iter()
        .map(|c| Primitive::Polygon {
            points: hexagon(c, size),
        })
        .collect();
    pass
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/honeycomb.rs"]
mod tests;
