//! Blending a finished pattern layer onto the gradient surface.

use crate::foundation::error::{BgError, BgResult};
use crate::foundation::math::{add_sat_u8, mul_div255_u8};

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over: `src + dst·(1 − src.a)`.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let keep = 255 - u16::from(src[3]);
    std::array::from_fn(|i| add_sat_u8(src[i], mul_div255_u8(u16::from(dst[i]), keep)))
}

/// Lay a premultiplied `layer` over `surface`. Both buffers must be the same RGBA8 size.
///
/// Layer opacity is already baked into the layer's alpha, so there is no extra multiplier.
pub fn composite_layer(surface: &mut [u8], layer: &[u8]) -> BgResult<()> {
    if surface.len() != layer.len() || !surface.len().is_multiple_of(4) {
        return Err(BgError::render(format!(
            "layer of {} bytes does not match surface of {} bytes",
            layer.len(),
            surface.len()
        )));
    }
    for (d, s) in surface.chunks_exact_mut(4).zip(layer.chunks_exact(4)) {
        match s[3] {
            0 => {}
            255 => d.copy_from_slice(s),
            _ => {
                let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
                d.copy_from_slice(&out);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
