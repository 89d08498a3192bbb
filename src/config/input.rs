//! Form-input boundary.
//!
//! Each UI control is addressed by a string key and produces a raw string. Malformed numbers never
//! surface as errors: they degrade to a per-control default, the way the browser form does.

use rand::Rng as _;

use crate::config::model::{Configuration, GradientKind, HoneycombStyle, PatternKind};
use crate::foundation::core::Rgb8;
use crate::foundation::error::{BgError, BgResult};

/// Fallback for width/height inputs that do not parse (or parse to 0).
pub const DIMENSION_FALLBACK: u32 = 100;
/// Fallback for generic integer inputs that do not parse (or parse to 0).
pub const INTEGER_FALLBACK: i64 = 1;
/// Exclusive upper bound of seeds drawn by [`random_seed`].
pub const RANDOM_SEED_LIMIT: u32 = 100_000;

/// Every control key understood by [`apply_control`].
pub const CONTROL_KEYS: &[&str] = &[
    "preset",
    "width",
    "height",
    "stops",
    "color0",
    "color1",
    "color2",
    "gradient",
    "angle",
    "center-x",
    "pattern",
    "seed",
    "bubbles-count",
    "bubbles-min",
    "bubbles-max",
    "bubbles-opacity",
    "bubbles-blur",
    "bubbles-color",
    "bubbles-randomize",
    "honeycomb-size",
    "honeycomb-thickness",
    "honeycomb-opacity",
    "honeycomb-style",
    "honeycomb-color",
    "dots-spacing",
    "dots-size",
    "dots-opacity",
    "dots-color",
    "lines-spacing",
    "lines-thickness",
    "lines-angle",
    "lines-opacity",
    "lines-color",
    "waves-count",
    "waves-amplitude",
    "waves-frequency",
    "waves-thickness",
    "waves-opacity",
    "waves-color",
];

/// Parse the leading integer of `raw`, ignoring leading whitespace and any trailing garbage.
///
/// `"12px"` → 12, `"  -3.9"` → -3, `"abc"` → `None`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (neg, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let v = rest[..digits].parse::<i64>().ok()?;
    Some(if neg { -v } else { v })
}

/// Leading-integer parse where failure *and zero* fall back to `default`.
pub fn parse_int_or(raw: &str, default: i64) -> i64 {
    match parse_int(raw) {
        Some(0) | None => default,
        Some(v) => v,
    }
}

/// Parse the longest numeric prefix of `raw` as a float (`"1.5e2px"` → 150.0).
pub fn parse_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let b = s.as_bytes();
    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return Some(if b.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    let int_digits = b[i..].iter().take_while(|c| c.is_ascii_digit()).count();
    i += int_digits;
    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        frac_digits = b[i + 1..].iter().take_while(|c| c.is_ascii_digit()).count();
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = b[j.min(b.len())..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    s[..i].parse::<f64>().ok()
}

/// Float parse where failure falls back to `default`.
pub fn parse_float_or(raw: &str, default: f64) -> f64 {
    parse_float(raw).unwrap_or(default)
}

/// Parse a `"<width>x<height>"` preset such as `"1920x1080"`.
pub fn parse_preset(raw: &str) -> Option<(u32, u32)> {
    let (w, h) = raw.trim().split_once(['x', 'X'])?;
    let w = w.trim().parse::<u32>().ok().filter(|v| *v > 0)?;
    let h = h.trim().parse::<u32>().ok().filter(|v| *v > 0)?;
    Some((w, h))
}

/// Draw a fresh, non-reproducible bubble seed in `[0, RANDOM_SEED_LIMIT)`.
pub fn random_seed() -> u32 {
    rand::thread_rng().gen_range(0..RANDOM_SEED_LIMIT)
}

fn dimension(raw: &str) -> u32 {
    let v = parse_int_or(raw, i64::from(DIMENSION_FALLBACK));
    u32::try_from(v).unwrap_or(DIMENSION_FALLBACK)
}

fn slider(raw: &str) -> f64 {
    parse_float_or(raw, 0.0)
}

fn percent_slider(raw: &str) -> f64 {
    slider(raw) / 100.0
}

fn count_slider(raw: &str) -> u32 {
    let v = slider(raw);
    if v.is_finite() {
        v.round().clamp(0.0, f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

fn set_color(slot: &mut Rgb8, raw: &str) {
    if let Ok(c) = Rgb8::parse_hex(raw.trim()) {
        *slot = c;
    }
}

fn choice<T>(key: &str, raw: &str, options: &[(&str, T)]) -> BgResult<T>
where
    T: Copy,
{
    let raw = raw.trim();
    options
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(raw))
        .map(|(_, v)| *v)
        .ok_or_else(|| BgError::validation(format!("control '{key}' does not accept '{raw}'")))
}

/// Apply one control's raw value to `cfg`.
///
/// Returns `Ok(true)` when the configuration changed. Unknown keys and unknown choices for
/// enumerated controls are validation errors; malformed numbers and colours are not.
pub fn apply_control(cfg: &mut Configuration, key: &str, raw: &str) -> BgResult<bool> {
    let before = cfg.clone();
    match key {
        "preset" => {
            if let Some((w, h)) = parse_preset(raw) {
                cfg.width = w;
                cfg.height = h;
            }
        }
        "width" => cfg.width = dimension(raw),
        "height" => cfg.height = dimension(raw),
        "stops" => {
            if let Some(n @ (2 | 3)) = parse_int(raw) {
                cfg.gradient.stops = n as u8;
            }
        }
        "color0" => set_color(&mut cfg.gradient.colors[0], raw),
        "color1" => set_color(&mut cfg.gradient.colors[1], raw),
        "color2" => set_color(&mut cfg.gradient.colors[2], raw),
        "gradient" => {
            cfg.gradient.kind = choice(
                key,
                raw,
                &[("linear", GradientKind::Linear), ("radial", GradientKind::Radial)],
            )?;
        }
        "angle" => cfg.gradient.angle = parse_int(raw).unwrap_or(0) as f64,
        "center-x" => cfg.gradient.center_x = slider(raw),
        "pattern" => {
            cfg.pattern = choice(
                key,
                raw,
                &[
                    ("none", PatternKind::None),
                    ("bubbles", PatternKind::Bubbles),
                    ("honeycomb", PatternKind::Honeycomb),
                    ("dots", PatternKind::Dots),
                    ("lines", PatternKind::Lines),
                    ("waves", PatternKind::Waves),
                ],
            )?;
        }
        "seed" => {
            if let Some(v) = parse_int(raw) {
                cfg.bubbles.seed = v as u32;
            }
        }

        "bubbles-count" => cfg.bubbles.count = count_slider(raw),
        "bubbles-min" => cfg.bubbles.min_radius = parse_int_or(raw, INTEGER_FALLBACK) as f64,
        "bubbles-max" => cfg.bubbles.max_radius = parse_int_or(raw, INTEGER_FALLBACK) as f64,
        "bubbles-opacity" => cfg.bubbles.opacity = percent_slider(raw),
        "bubbles-blur" => cfg.bubbles.blur = slider(raw),
        "bubbles-color" => set_color(&mut cfg.bubbles.color, raw),
        "bubbles-randomize" => cfg.bubbles.seed = random_seed(),

        "honeycomb-size" => cfg.honeycomb.size = slider(raw),
        "honeycomb-thickness" => cfg.honeycomb.thickness = slider(raw),
        "honeycomb-opacity" => cfg.honeycomb.opacity = percent_slider(raw),
        "honeycomb-style" => {
            cfg.honeycomb.style = choice(
                key,
                raw,
                &[("stroke", HoneycombStyle::Stroke), ("fill", HoneycombStyle::Fill)],
            )?;
        }
        "honeycomb-color" => set_color(&mut cfg.honeycomb.color, raw),

        "dots-spacing" => cfg.dots.spacing = slider(raw),
        "dots-size" => cfg.dots.size = slider(raw),
        "dots-opacity" => cfg.dots.opacity = percent_slider(raw),
        "dots-color" => set_color(&mut cfg.dots.color, raw),

        "lines-spacing" => cfg.lines.spacing = slider(raw),
        "lines-thickness" => cfg.lines.thickness = slider(raw),
        "lines-angle" => cfg.lines.angle = slider(raw),
        "lines-opacity" => cfg.lines.opacity = percent_slider(raw),
        "lines-color" => set_color(&mut cfg.lines.color, raw),

        "waves-count" => cfg.waves.count = count_slider(raw),
        "waves-amplitude" => cfg.waves.amplitude = slider(raw),
        "waves-frequency" => cfg.waves.frequency = slider(raw),
        "waves-thickness" => cfg.waves.thickness = slider(raw),
        "waves-opacity" => cfg.waves.opacity = percent_slider(raw),
        "waves-color" => set_color(&mut cfg.waves.color, raw),

        other => {
            return Err(BgError::validation(format!("unknown control '{other}'")));
        }
    }
    Ok(*cfg != before)
}

/// A `key=value` control assignment, as passed on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlAssignment {
    /// Control key, e.g. `bubbles-count`.
    pub key: String,
    /// Raw value as typed.
    pub value: String,
}

impl ControlAssignment {
    /// Parse `key=value`. The key must be one of [`CONTROL_KEYS`].
    pub fn parse(raw: &str) -> BgResult<Self> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| BgError::validation(format!("expected key=value, got '{raw}'")))?;
        let key = key.trim();
        if !CONTROL_KEYS.contains(&key) {
            return Err(BgError::validation(format!("unknown control '{key}'")));
        }
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Apply this assignment to `cfg`.
    pub fn apply(&self, cfg: &mut Configuration) -> BgResult<bool> {
        apply_control(cfg, &self.key, &self.value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/input.rs"]
mod tests;
