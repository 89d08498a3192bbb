//! The configuration record consumed by every render.
//!
//! Every per-pattern parameter set is always present, whichever pattern is selected. Defaults
//! reproduce the generator's initial state.

use crate::foundation::core::{Canvas, Rgb8};
use crate::foundation::error::{BgError, BgResult};

/// Smallest spacing/cell size the pattern generators accept, in pixels.
pub(crate) const MIN_PITCH_PX: f64 = 1.0;

/// Gradient ramp shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    /// Straight ramp along `angle`.
    #[default]
    Linear,
    /// Circular ramp around the anchor point.
    Radial,
}

/// Overlay pattern selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Gradient only.
    #[default]
    None,
    /// Seeded random circles.
    Bubbles,
    /// Hexagon tiling.
    Honeycomb,
    /// Regular dot grid.
    Dots,
    /// Parallel strokes.
    Lines,
    /// Horizontal sinusoids.
    Waves,
}

/// Whether honeycomb cells are outlined or filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoneycombStyle {
    /// Outline each hexagon.
    #[default]
    Stroke,
    /// Fill each hexagon.
    Fill,
}

const DEFAULT_COLORS: [Rgb8; 3] = [
    Rgb8::new(0x1a, 0x1a, 0x2e),
    Rgb8::new(0x16, 0x21, 0x3e),
    Rgb8::new(0x0f, 0x34, 0x60),
];

fn deserialize_colors<'de, D>(deserializer: D) -> Result<[Rgb8; 3], D::Error>
where
    D: serde::Deserializer<'de>,
{
    let list = <Vec<Rgb8> as serde::Deserialize>::deserialize(deserializer)?;
    match list.as_slice() {
        &[a, b] => Ok([a, b, DEFAULT_COLORS[2]]),
        &[a, b, c] => Ok([a, b, c]),
        other => Err(serde::de::Error::invalid_length(
            other.len(),
            &"a list of 2 or 3 colours",
        )),
    }
}

/// Gradient parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// Ramp shape.
    pub kind: GradientKind,
    /// Colour list; only the first `stops` entries are consulted.
    ///
    /// JSON accepts two or three entries; a missing third colour takes its default.
    #[serde(deserialize_with = "deserialize_colors")]
    pub colors: [Rgb8; 3],
    /// Number of stops, 2 or 3.
    pub stops: u8,
    /// Direction in degrees (linear only).
    pub angle: f64,
    /// Horizontal anchor as a percentage of the width.
    pub center_x: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            colors: DEFAULT_COLORS,
            stops: 2,
            angle: 135.0,
            center_x: 50.0,
        }
    }
}

impl GradientConfig {
    /// Effective stop count: 3 when requested, otherwise 2.
    pub fn stop_count(&self) -> usize {
        if self.stops >= 3 { 3 } else { 2 }
    }
}

/// Bubbles parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BubblesParams {
    /// Number of circles.
    pub count: u32,
    /// Smallest radius in pixels.
    pub min_radius: f64,
    /// Largest radius in pixels.
    pub max_radius: f64,
    /// Pass opacity in `[0,1]`.
    pub opacity: f64,
    /// Gaussian blur in pixels; 0 disables it.
    pub blur: f64,
    /// Fill colour.
    pub color: Rgb8,
    /// PRNG seed for the layout.
    pub seed: u32,
}

impl Default for BubblesParams {
    fn default() -> Self {
        Self {
            count: 50,
            min_radius: 5.0,
            max_radius: 40.0,
            opacity: 0.15,
            blur: 0.0,
            color: Rgb8::WHITE,
            seed: 42,
        }
    }
}

/// Honeycomb parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HoneycombParams {
    /// Hexagon circumradius in pixels.
    pub size: f64,
    /// Stroke width in pixels.
    pub thickness: f64,
    /// Pass opacity in `[0,1]`.
    pub opacity: f64,
    /// Outline or fill.
    pub style: HoneycombStyle,
    /// Stroke/fill colour.
    pub color: Rgb8,
}

impl Default for HoneycombParams {
    fn default() -> Self {
        Self {
            size: 30.0,
            thickness: 1.0,
            opacity: 0.15,
            style: HoneycombStyle::Stroke,
            color: Rgb8::WHITE,
        }
    }
}

/// Dots parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DotsParams {
    /// Grid pitch in pixels.
    pub spacing: f64,
    /// Dot radius in pixels.
    pub size: f64,
    /// Pass opacity in `[0,1]`.
    pub opacity: f64,
    /// Fill colour.
    pub color: Rgb8,
}

impl Default for DotsParams {
    fn default() -> Self {
        Self {
            spacing: 30.0,
            size: 3.0,
            opacity: 0.15,
            color: Rgb8::WHITE,
        }
    }
}

/// Lines parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LinesParams {
    /// Perpendicular distance between lines in pixels.
    pub spacing: f64,
    /// Stroke width in pixels.
    pub thickness: f64,
    /// Line direction in degrees.
    pub angle: f64,
    /// Pass opacity in `[0,1]`.
    pub opacity: f64,
    /// Stroke colour.
    pub color: Rgb8,
}

impl Default for LinesParams {
    fn default() -> Self {
        Self {
            spacing: 20.0,
            thickness: 1.0,
            angle: 45.0,
            opacity: 0.15,
            color: Rgb8::WHITE,
        }
    }
}

/// Waves parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WavesParams {
    /// Number of waves.
    pub count: u32,
    /// Peak deviation from the baseline in pixels.
    pub amplitude: f64,
    /// Full cycles across the canvas width.
    pub frequency: f64,
    /// Stroke width in pixels.
    pub thickness: f64,
    /// Pass opacity in `[0,1]`.
    pub opacity: f64,
    /// Stroke colour.
    pub color: Rgb8,
}

impl Default for WavesParams {
    fn default() -> Self {
        Self {
            count: 5,
            amplitude: 30.0,
            frequency: 3.0,
            thickness: 2.0,
            opacity: 0.15,
            color: Rgb8::WHITE,
        }
    }
}

/// Full set of user-tunable parameters driving one render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Background gradient.
    pub gradient: GradientConfig,
    /// Active overlay pattern.
    pub pattern: PatternKind,
    /// Bubbles parameters.
    pub bubbles: BubblesParams,
    /// Honeycomb parameters.
    pub honeycomb: HoneycombParams,
    /// Dots parameters.
    pub dots: DotsParams,
    /// Lines parameters.
    pub lines: LinesParams,
    /// Waves parameters.
    pub waves: WavesParams,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            gradient: GradientConfig::default(),
            pattern: PatternKind::None,
            bubbles: BubblesParams::default(),
            honeycomb: HoneycombParams::default(),
            dots: DotsParams::default(),
            lines: LinesParams::default(),
            waves: WavesParams::default(),
        }
    }
}

impl Configuration {
    /// Parse a (possibly partial) JSON document; missing fields take their defaults.
    pub fn from_json(s: &str) -> BgResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> BgResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Output surface size, at least one pixel per side.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Strict check for callers that want to reject out-of-contract values instead of relying on
    /// the renderer's clamping.
    pub fn validate(&self) -> BgResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BgError::validation("width and height must be > 0"));
        }
        if !matches!(self.gradient.stops, 2 | 3) {
            return Err(BgError::validation("gradient stops must be 2 or 3"));
        }
        if !(0.0..=100.0).contains(&self.gradient.center_x) {
            return Err(BgError::validation("gradient center_x must be within 0..=100"));
        }
        if !self.gradient.angle.is_finite() {
            return Err(BgError::validation("gradient angle must be finite"));
        }

        let b = &self.bubbles;
        if !(b.min_radius >= 0.0 && b.min_radius <= b.max_radius) {
            return Err(BgError::validation(
                "bubbles radii must satisfy 0 <= min_radius <= max_radius",
            ));
        }
        if !(b.blur >= 0.0 && b.blur.is_finite()) {
            return Err(BgError::validation("bubbles blur must be finite and >= 0"));
        }
        if !(self.honeycomb.size > 0.0 && self.honeycomb.size.is_finite()) {
            return Err(BgError::validation("honeycomb size must be > 0"));
        }
        if !(self.dots.spacing > 0.0 && self.dots.spacing.is_finite()) {
            return Err(BgError::validation("dots spacing must be > 0"));
        }
        if !(self.lines.spacing > 0.0 && self.lines.spacing.is_finite()) {
            return Err(BgError::validation("lines spacing must be > 0"));
        }
        if self.waves.count == 0 {
            return Err(BgError::validation("waves count must be >= 1"));
        }
        if !(self.waves.frequency >= 0.0 && self.waves.frequency.is_finite()) {
            return Err(BgError::validation("waves frequency must be finite and >= 0"));
        }

        for (name, opacity) in [
            ("bubbles", b.opacity),
            ("honeycomb", self.honeycomb.opacity),
            ("dots", self.dots.opacity),
            ("lines", self.lines.opacity),
            ("waves", self.waves.opacity),
        ] {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(BgError::validation(format!(
                    "{name} opacity must be within 0..=1"
                )));
            }
        }
        Ok(())
    }

    /// Copy with every value forced into the range the renderers can draw.
    ///
    /// Opacities clamp to `[0,1]`, pitches to at least one pixel, and non-finite numbers fall
    /// back to zero. A reversed bubble radius range is kept: radii are drawn from `(max, min]`.
    pub fn sanitized(&self) -> Self {
        let mut c = self.clone();
        c.width = c.width.max(1);
        c.height = c.height.max(1);

        let g = &mut c.gradient;
        g.stops = g.stops.clamp(2, 3);
        g.angle = finite_or(g.angle, 0.0);
        g.center_x = finite_or(g.center_x, 50.0).clamp(0.0, 100.0);

        let b = &mut c.bubbles;
        b.min_radius = finite_or(b.min_radius, 0.0).max(0.0);
        b.max_radius = finite_or(b.max_radius, 0.0).max(0.0);
        b.opacity = clamp_unit(b.opacity);
        b.blur = finite_or(b.blur, 0.0).max(0.0);

        let h = &mut c.honeycomb;
        h.size = finite_or(h.size, MIN_PITCH_PX).max(MIN_PITCH_PX);
        h.thickness = finite_or(h.thickness, 0.0).max(0.0);
        h.opacity = clamp_unit(h.opacity);

        let d = &mut c.dots;
        d.spacing = finite_or(d.spacing, MIN_PITCH_PX).max(MIN_PITCH_PX);
        d.size = finite_or(d.size, 0.0).max(0.0);
        d.opacity = clamp_unit(d.opacity);

        let l = &mut c.lines;
        l.spacing = finite_or(l.spacing, MIN_PITCH_PX).max(MIN_PITCH_PX);
        l.thickness = finite_or(l.thickness, 0.0).max(0.0);
        l.angle = finite_or(l.angle, 0.0);
        l.opacity = clamp_unit(l.opacity);

        let w = &mut c.waves;
        w.count = w.count.max(1);
        w.amplitude = finite_or(w.amplitude, 0.0);
        w.frequency = finite_or(w.frequency, 0.0).max(0.0);
        w.thickness = finite_or(w.thickness, 0.0).max(0.0);
        w.opacity = clamp_unit(w.opacity);

        c
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

fn clamp_unit(v: f64) -> f64 {
    finite_or(v, 0.0).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
