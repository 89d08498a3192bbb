use crate::config::model::Configuration;
use crate::foundation::error::BgResult;
use crate::gradient::geometry::GradientDesc;
use crate::pattern::build_pass;
use crate::render::backend::{FrameRGBA, RasterBackend};
use crate::render::cpu::CpuBackend;

/// Render `cfg` on `backend`: resize (discarding old pixels), paint the gradient, then draw at
/// most one pattern pass.
///
/// Out-of-range values are clamped first (see [`Configuration::sanitized`]).
#[tracing::instrument(
    skip_all,
    fields(width = cfg.width, height = cfg.height, pattern = ?cfg.pattern)
)]
pub fn render_with(backend: &mut dyn RasterBackend, cfg: &Configuration) -> BgResult<FrameRGBA> {
    let cfg = cfg.sanitized();
    let canvas = cfg.canvas();

    backend.resize(canvas)?;
    backend.fill_gradient(&GradientDesc::resolve(&cfg.gradient, canvas))?;

    if let Some(pass) = build_pass(&cfg, canvas) {
        tracing::debug!(
            primitives = pass.primitives.len(),
            opacity = pass.opacity,
            blur = pass.blur,
            "pattern pass"
        );
        backend.draw_pass(&pass)?;
    }

    Ok(backend.frame())
}

/// Render `cfg` on a fresh CPU backend.
pub fn render(cfg: &Configuration) -> BgResult<FrameRGBA> {
    render_with(&mut CpuBackend::new(), cfg)
}

#[cfg(test)]
#[path = "../../tests/unit/render/orchestrator.rs"]
mod tests;
