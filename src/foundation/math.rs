pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Convert an opacity in `[0,1]` to an 8-bit alpha. Non-finite input maps to 0.
pub(crate) fn opacity_to_u8(opacity: f64) -> u8 {
    if !opacity.is_finite() {
        return 0;
    }
    (opacity.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Linear interpolation between two channel values, rounded to nearest.
pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let (af, bf) = (f64::from(a), f64::from(b));
    (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
}

/// Undo premultiplication in place; fully transparent pixels become zero.
pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
