//! Gradient geometry: where the colour ramp starts and ends on a canvas, and which colour it has
//! at a given point.

use crate::config::model::{GradientConfig, GradientKind};
use crate::foundation::core::{Canvas, Point, Rgb8, Vec2};
use crate::foundation::math::lerp_u8;

/// Ramp shape resolved against a concrete canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientShape {
    /// Ramp from `start` (t=0) to `end` (t=1).
    Linear {
        /// Point where t = 0.
        start: Point,
        /// Point where t = 1.
        end: Point,
    },
    /// Ramp from `center` (t=0) to distance `radius` (t=1).
    Radial {
        /// Circle centre.
        center: Point,
        /// Distance at which t = 1.
        radius: f64,
    },
}

/// One `(offset, colour)` entry of the ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    /// Position along the ramp, in `[0,1]`.
    pub offset: f64,
    /// Colour at `offset`.
    pub color: Rgb8,
}

/// Fully resolved gradient for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDesc {
    /// Geometry.
    pub shape: GradientShape,
    /// Two or three stops in ascending offset order.
    pub stops: Vec<ColorStop>,
}

/// Anchor shared by both gradient kinds: `(width * center_x / 100, height / 2)`.
pub fn anchor(canvas: Canvas, center_x: f64) -> Point {
    Point::new(canvas.w() * center_x / 100.0, canvas.h() / 2.0)
}

/// Signed projections of the canvas corners onto `dir`, relative to `origin`, as `(min, max)`.
pub fn corner_projection_extent(canvas: Canvas, origin: Point, dir: Vec2) -> (f64, f64) {
    canvas
        .corners()
        .iter()
        .map(|&c| (c - origin).dot(dir))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p), hi.max(p))
        })
}

/// Endpoints of a linear ramp at `angle_deg` through the anchor that exactly span the canvas.
pub fn linear_endpoints(canvas: Canvas, center_x: f64, angle_deg: f64) -> (Point, Point) {
    let origin = anchor(canvas, center_x);
    let a = angle_deg.to_radians();
    let dir = Vec2::new(a.cos(), a.sin());
    let (lo, hi) = corner_projection_extent(canvas, origin, dir);
    (origin + dir * lo, origin + dir * hi)
}

/// Radius from `center` that reaches the farthest canvas corner.
pub fn radial_radius(canvas: Canvas, center: Point) -> f64 {
    let dx = center.x.max(canvas.w() - center.x);
    let dy = center.y.max(canvas.h() - center.y);
    (dx * dx + dy * dy).sqrt()
}

/// Stops for the configured stop count; a third colour is ignored unless three stops are active.
pub fn color_stops(cfg: &GradientConfig) -> Vec<ColorStop> {
    let [c0, c1, c2] = cfg.colors;
    match cfg.stop_count() {
        3 => vec![
            ColorStop { offset: 0.0, color: c0 },
            ColorStop { offset: 0.5, color: c1 },
            ColorStop { offset: 1.0, color: c2 },
        ],
        _ => vec![
            ColorStop { offset: 0.0, color: c0 },
            ColorStop { offset: 1.0, color: c1 },
        ],
    }
}

impl GradientDesc {
    /// Resolve gradient settings against `canvas`.
    pub fn resolve(cfg: &GradientConfig, canvas: Canvas) -> Self {
        let shape = match cfg.kind {
            GradientKind::Linear => {
                let (start, end) = linear_endpoints(canvas, cfg.center_x, cfg.angle);
                GradientShape::Linear { start, end }
            }
            GradientKind::Radial => {
                let center = anchor(canvas, cfg.center_x);
                GradientShape::Radial {
                    center,
                    radius: radial_radius(canvas, center),
                }
            }
        };
        Self {
            shape,
            stops: color_stops(cfg),
        }
    }

    /// Ramp parameter at `p`, clamped to `[0,1]` (pad extend).
    pub fn t_at(&self, p: Point) -> f64 {
        let t = match self.shape {
            GradientShape::Linear { start, end } => {
                let d = end - start;
                let len2 = d.hypot2();
                if len2 <= f64::EPSILON {
                    0.0
                } else {
                    (p - start).dot(d) / len2
                }
            }
            GradientShape::Radial { center, radius } => {
                if radius <= f64::EPSILON {
                    0.0
                } else {
                    (p - center).hypot() / radius
                }
            }
        };
        if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 }
    }

    /// Interpolated colour at ramp parameter `t`.
    pub fn color_at(&self, t: f64) -> Rgb8 {
        let Some(first) = self.stops.first() else {
            return Rgb8::new(0, 0, 0);
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let local = if span <= 0.0 { 1.0 } else { (t - a.offset) / span };
                return Rgb8::new(
                    lerp_u8(a.color.r, b.color.r, local),
                    lerp_u8(a.color.g, b.color.g, local),
                    lerp_u8(a.color.b, b.color.b, local),
                );
            }
        }
        self.stops.last().map_or(first.color, |s| s.color)
    }

    /// Colour at canvas point `p`.
    pub fn sample(&self, p: Point) -> Rgb8 {
        self.color_at(self.t_at(p))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/geometry.rs"]
mod tests;
