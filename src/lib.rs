//! bgmaker renders static background images: a linear or radial gradient with an optional
//! procedural overlay pattern (bubbles, honeycomb, dots, lines or waves).
//!
//! Rendering is a pure function of a [`Configuration`]:
//!
//! - Build or load a [`Configuration`] (JSON via serde, or form-style [`apply_control`] inputs)
//! - [`render`] it into a [`FrameRGBA`], or keep a [`Session`] that re-renders on every change
//! - [`encode`] the surface as PNG or JPEG
//!
//! Seeded layouts use [`Mulberry32`], so the same configuration always yields the same pixels.
#![forbid(unsafe_code)]

mod config;
mod encode;
mod foundation;
mod gradient;
mod pattern;
mod render;
mod session;

pub use crate::config::input::{
    CONTROL_KEYS, ControlAssignment, apply_control, parse_float, parse_float_or, parse_int,
    parse_int_or, parse_preset, random_seed,
};
pub use crate::config::model::{
    BubblesParams, Configuration, DotsParams, GradientConfig, GradientKind, HoneycombParams,
    HoneycombStyle, LinesParams, PatternKind, WavesParams,
};
pub use crate::encode::{ExportFormat, JPEG_QUALITY, encode, export_filename, write_atomic};
pub use crate::foundation::core::{Canvas, Point, Rgb8, Vec2};
pub use crate::foundation::error::{BgError, BgResult};
pub use crate::foundation::rng::Mulberry32;
pub use crate::gradient::geometry::{
    ColorStop, GradientDesc, GradientShape, anchor, color_stops, linear_endpoints, radial_radius,
};
pub use crate::pattern::{bubbles, build_pass, dots, honeycomb, lines, waves};
pub use crate::render::backend::{BackendKind, FrameRGBA, RasterBackend, create_backend};
pub use crate::render::blur::{GaussianKernel, blur_premul_in_place};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::orchestrator::{render, render_with};
pub use crate::render::primitive::{DrawStyle, PatternPass, Primitive};
pub use crate::session::{Export, Session};
