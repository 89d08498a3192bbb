//! Pattern-layer blur: a separable Gaussian over premultiplied RGBA8 with Q16 weights.
//!
//! A blur of `N` pixels uses `N` as the standard deviation (the CSS `blur()` convention), with
//! taps out to `ceil(3σ)` on each side. Samples past the layer edge repeat the edge pixel.

use crate::foundation::error::{BgError, BgResult};

const ONE_Q16: u32 = 1 << 16;

/// Normalised 1-D Gaussian taps in Q16; the weights sum to exactly `1 << 16`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GaussianKernel {
    weights: Vec<u32>,
}

impl GaussianKernel {
    /// Kernel for a blur of `blur_px` pixels, or `None` when the value disables blurring.
    pub fn for_blur(blur_px: f64) -> Option<Self> {
        if !(blur_px.is_finite() && blur_px > 0.0) {
            return None;
        }
        let radius = (3.0 * blur_px).ceil().min(f64::from(u16::MAX)) as i64;
        let denom = 2.0 * blur_px * blur_px;
        let raw: Vec<f64> = (-radius..=radius)
            .map(|i| {
                let x = i as f64;
                (-x * x / denom).exp()
            })
            .collect();
        let total: f64 = raw.iter().sum();

        // Quantize the running sum, not each tap, so rounding never drifts off ONE_Q16.
        let mut running = 0.0;
        let mut prev = 0u32;
        let weights = raw
            .iter()
            .map(|w| {
                running += w;
                let q = ((running / total) * f64::from(ONE_Q16)).round() as u32;
                let tap = q - prev;
                prev = q;
                tap
            })
            .collect();
        Some(Self { weights })
    }

    /// Taps on each side of the centre.
    pub fn radius(&self) -> usize {
        self.weights.len() / 2
    }

    /// All taps, left to right.
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }
}

#[derive(Clone, Copy, Debug)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Blur a premultiplied `width`×`height` layer in place. Non-positive or non-finite `blur_px`
/// leaves it untouched.
pub fn blur_premul_in_place(
    layer: &mut [u8],
    width: u32,
    height: u32,
    blur_px: f64,
) -> BgResult<()> {
    blur_with_scratch(layer, &mut Vec::new(), width, height, blur_px)
}

/// [`blur_premul_in_place`] reusing `scratch` for the intermediate pass.
pub(crate) fn blur_with_scratch(
    layer: &mut [u8],
    scratch: &mut Vec<u8>,
    width: u32,
    height: u32,
    blur_px: f64,
) -> BgResult<()> {
    let (w, h) = (width as usize, height as usize);
    if w.checked_mul(h).and_then(|n| n.checked_mul(4)) != Some(layer.len()) {
        return Err(BgError::render(format!(
            "blur layer is {} bytes, expected {width}x{height} rgba8",
            layer.len()
        )));
    }
    let Some(kernel) = GaussianKernel::for_blur(blur_px) else {
        return Ok(());
    };

    scratch.clear();
    scratch.resize(layer.len(), 0);
    convolve(layer, scratch, w, h, &kernel, Axis::Horizontal);
    convolve(scratch, layer, w, h, &kernel, Axis::Vertical);
    Ok(())
}

/// One 1-D pass along `axis`. A "line" is a row for horizontal passes and a column for
/// vertical ones.
fn convolve(src: &[u8], dst: &mut [u8], w: usize, h: usize, kernel: &GaussianKernel, axis: Axis) {
    let (line_len, lines, px_stride, line_stride) = match axis {
        Axis::Horizontal => (w, h, 4, w * 4),
        Axis::Vertical => (h, w, w * 4, 4),
    };
    let r = kernel.radius() as isize;
    let last = line_len as isize - 1;

    for line in 0..lines {
        let base = line * line_stride;
        for i in 0..line_len {
            let mut acc = [0u64; 4];
            for (k, &weight) in kernel.weights().iter().enumerate() {
                if weight == 0 {
                    continue;
                }
                let j = (i as isize + k as isize - r).clamp(0, last) as usize;
                let at = base + j * px_stride;
                for (a, &v) in acc.iter_mut().zip(&src[at..at + 4]) {
                    *a += u64::from(weight) * u64::from(v);
                }
            }
            let at = base + i * px_stride;
            for (out, a) in dst[at..at + 4].iter_mut().zip(acc) {
                *out = ((a + u64::from(ONE_Q16 / 2)) >> 16).min(255) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
