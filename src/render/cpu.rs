use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{BgError, BgResult};
use crate::foundation::math::opacity_to_u8;
use crate::gradient::geometry::GradientDesc;
use crate::render::backend::{FrameRGBA, RasterBackend};
use crate::render::blur::blur_with_scratch;
use crate::render::composite::composite_layer;
use crate::render::primitive::{DrawStyle, PatternPass};

/// Canvas 2D's default miter limit.
const MITER_LIMIT: f64 = 10.0;

/// CPU raster backend.
///
/// The gradient is rasterized directly into the surface; pattern passes are drawn by `vello_cpu`
/// into a transparent layer that is blurred (optionally) and composited source-over.
pub struct CpuBackend {
    canvas: Canvas,
    surface: Vec<u8>,
    ctx: Option<vello_cpu::RenderContext>,
    blur_scratch: Vec<u8>,
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBackend {
    /// Backend with a 1×1 transparent surface; call [`RasterBackend::resize`] before drawing.
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(1, 1),
            surface: vec![0; 4],
            ctx: None,
            blur_scratch: Vec::new(),
        }
    }

    fn dims_u16(&self) -> BgResult<(u16, u16)> {
        let w: u16 = self
            .canvas
            .width
            .try_into()
            .map_err(|_| BgError::render("surface width exceeds u16"))?;
        let h: u16 = self
            .canvas
            .height
            .try_into()
            .map_err(|_| BgError::render("surface height exceeds u16"))?;
        Ok((w, h))
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> BgResult<R>,
    ) -> BgResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl RasterBackend for CpuBackend {
    fn resize(&mut self, canvas: Canvas) -> BgResult<()> {
        self.canvas = canvas;
        self.dims_u16()?;
        self.surface.clear();
        self.surface.resize(canvas.rgba_len(), 0);
        Ok(())
    }

    fn fill_gradient(&mut self, gradient: &GradientDesc) -> BgResult<()> {
        let w = self.canvas.width as usize;
        for (i, px) in self.surface.chunks_exact_mut(4).enumerate() {
            let (x, y) = (i % w, i / w);
            let c = gradient.sample(Point::new(x as f64 + 0.5, y as f64 + 0.5));
            px.copy_from_slice(&[c.r, c.g, c.b, 255]);
        }
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(primitives = pass.primitives.len(), blur = pass.blur))]
    fn draw_pass(&mut self, pass: &PatternPass) -> BgResult<()> {
        if !pass.is_visible() {
            tracing::debug!("pattern pass has no visible output");
            return Ok(());
        }
        let (w, h) = self.dims_u16()?;
        let mut layer = vello_cpu::Pixmap::new(w, h);

        self.with_ctx_mut(w, h, |ctx| {
            let c = pass.color;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                c.r,
                c.g,
                c.b,
                opacity_to_u8(pass.opacity),
            ));
            if let DrawStyle::Stroke { width } = pass.style {
                ctx.set_stroke(
                    vello_cpu::kurbo::Stroke::new(width)
                        .with_caps(vello_cpu::kurbo::Cap::Butt)
                        .with_join(vello_cpu::kurbo::Join::Miter)
                        .with_miter_limit(MITER_LIMIT),
                );
            }
            for prim in &pass.primitives {
                let path = bezpath_to_cpu(&prim.to_path());
                match pass.style {
                    DrawStyle::Fill => ctx.fill_path(&path),
                    DrawStyle::Stroke { .. } => ctx.stroke_path(&path),
                }
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut layer);
            Ok(())
        })?;

        let layer_bytes = layer.data_as_u8_slice_mut();
        if layer_bytes.len() != self.surface.len() {
            return Err(BgError::render("pattern layer buffer size mismatch"));
        }
        blur_with_scratch(
            layer_bytes,
            &mut self.blur_scratch,
            self.canvas.width,
            self.canvas.height,
            pass.blur,
        )?;
        composite_layer(&mut self.surface, layer_bytes)
    }

    fn frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: self.surface.clone(),
            premultiplied: true,
        }
    }
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
