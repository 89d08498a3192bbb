//! Backend-independent drawing primitives produced by the pattern generators.

use kurbo::{BezPath, Circle, Shape};

use crate::foundation::core::{Point, Rgb8};

/// Flattening tolerance used when converting curves to paths.
const PATH_TOLERANCE: f64 = 0.1;

/// One shape in a pattern pass.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Full circle.
    Circle {
        /// Centre point.
        center: Point,
        /// Radius in pixels.
        radius: f64,
    },
    /// Closed polygon through `points`.
    Polygon {
        /// Vertices in drawing order.
        points: Vec<Point>,
    },
    /// Straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Open polyline through `points`.
    Polyline {
        /// Vertices in drawing order.
        points: Vec<Point>,
    },
}

impl Primitive {
    /// Convert to a path in canvas coordinates.
    pub fn to_path(&self) -> BezPath {
        match self {
            Self::Circle { center, radius } => {
                Circle::new(*center, radius.max(0.0)).to_path(PATH_TOLERANCE)
            }
            Self::Polygon { points } => {
                let mut p = polyline_path(points);
                if !points.is_empty() {
                    p.close_path();
                }
                p
            }
            Self::Line { from, to } => {
                let mut p = BezPath::new();
                p.move_to(*from);
                p.line_to(*to);
                p
            }
            Self::Polyline { points } => polyline_path(points),
        }
    }
}

fn polyline_path(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    let mut it = points.iter();
    if let Some(&first) = it.next() {
        p.move_to(first);
        for &pt in it {
            p.line_to(pt);
        }
    }
    p
}

/// Stroke width used when a non-positive or non-finite width is requested.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// How every primitive of a pass is painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawStyle {
    /// Fill the interior.
    Fill,
    /// Stroke the outline with the given width in pixels.
    Stroke {
        /// Line width.
        width: f64,
    },
}

/// An ordered list of primitives sharing one paint, drawn as a single pattern layer.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternPass {
    /// Paint colour.
    pub color: Rgb8,
    /// Alpha multiplier applied to every primitive, in `[0,1]`.
    pub opacity: f64,
    /// Gaussian blur applied to the finished layer, in pixels; 0 disables it.
    pub blur: f64,
    /// Fill or stroke.
    pub style: DrawStyle,
    /// Primitives in drawing order.
    pub primitives: Vec<Primitive>,
}

impl DrawStyle {
    /// Stroke style; widths that are not positive and finite fall back to
    /// [`DEFAULT_STROKE_WIDTH`], as a canvas ignores such line widths.
    pub fn stroke(width: f64) -> Self {
        let width = if width.is_finite() && width > 0.0 {
            width
        } else {
            DEFAULT_STROKE_WIDTH
        };
        Self::Stroke { width }
    }
}

impl PatternPass {
    /// Empty pass with the given paint.
    pub fn new(color: Rgb8, opacity: f64, style: DrawStyle) -> Self {
        Self {
            color,
            opacity,
            blur: 0.0,
            style,
            primitives: Vec::new(),
        }
    }

    /// Set the layer blur.
    pub fn with_blur(mut self, blur: f64) -> Self {
        self.blur = blur;
        self
    }

    /// Append a primitive.
    pub fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }

    /// Whether drawing this pass can change any pixel.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && !self.primitives.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/primitive.rs"]
mod tests;
