use crate::foundation::core::Canvas;
use crate::foundation::error::BgResult;
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::gradient::geometry::GradientDesc;
use crate::render::primitive::PatternPass;

/// A rendered surface as RGBA8 pixels.
///
/// Surfaces are **premultiplied alpha**; the `premultiplied` flag keeps that explicit at API
/// boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA bytes with straight (non-premultiplied) alpha.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut out);
        }
        out
    }

    /// Pixel at `(x, y)` as stored, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// A raster surface that paints a gradient and pattern passes.
///
/// Calls follow the order `resize` → `fill_gradient` → at most one `draw_pass` → `frame`.
pub trait RasterBackend {
    /// Reallocate the surface at `canvas` size, discarding all previous content.
    fn resize(&mut self, canvas: Canvas) -> BgResult<()>;

    /// Paint the whole surface with `gradient`.
    fn fill_gradient(&mut self, gradient: &GradientDesc) -> BgResult<()>;

    /// Blend one pattern layer over the surface.
    fn draw_pass(&mut self, pass: &PatternPass) -> BgResult<()>;

    /// Copy of the current surface.
    fn frame(&self) -> FrameRGBA;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Create a rendering backend implementation.
pub fn create_backend(kind: BackendKind) -> Box<dyn RasterBackend> {
    match kind {
        BackendKind::Cpu => Box::new(crate::render::cpu::CpuBackend::new()),
    }
}
