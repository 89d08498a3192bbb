//! Overlay pattern generators.
//!
//! Each generator is a pure function of the canvas size and its own parameter set, returning the
//! primitives of one pattern layer in drawing order.

pub mod bubbles;
pub mod dots;
pub mod honeycomb;
pub mod lines;
pub mod waves;

use crate::config::model::{Configuration, PatternKind};
use crate::foundation::core::Canvas;
use crate::render::primitive::PatternPass;

/// Build the pass for the selected pattern, or `None` when no pattern is active.
pub fn build_pass(cfg: &Configuration, canvas: Canvas) -> Option<PatternPass> {
    match cfg.pattern {
        PatternKind::None => None,
        PatternKind::Bubbles => Some(bubbles::generate(canvas, &cfg.bubbles)),
        PatternKind::Honeycomb => Some(honeycomb::generate(canvas, &cfg.honeycomb)),
        PatternKind::Dots => Some(dots::generate(canvas, &cfg.dots)),
        PatternKind::Lines => Some(lines::generate(canvas, &cfg.lines)),
        PatternKind::Waves => Some(waves::generate(canvas, &cfg.waves)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/mod.rs"]
mod tests;
