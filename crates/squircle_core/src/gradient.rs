//! Colour gradients for ring colouring.
//!
//! A gradient is an ordered list of colour stops over [0, 1]. Ring `i` of
//! `n` is coloured with `sample(i / n)`, so the innermost ring takes the
//! first stop and outer rings walk toward the last.
//!
//! Stops serialize with hex colours in the gradient editor's `#AARRGGBB`
//! convention (alpha first). `#RRGGBB` is accepted on input. Hex colours
//! carry 8 bits per channel, so a component survives a save/load only if it
//! is a multiple of 1/255; anything else comes back rounded to the nearest
//! step.

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::{PatternError, PatternResult};

/// RGBA colour, components in 0.0-1.0.
pub type Rgba = [f32; 4];

/// A colour pinned at a position on the gradient.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position in [0, 1].
    pub position: f32,
    #[serde(with = "hex_color")]
    pub color: Rgba,
}

impl GradientStop {
    pub fn new(position: f32, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// Piecewise-linear colour ramp. Always holds at least one stop, sorted by position.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGradient")]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

#[derive(Deserialize)]
struct RawGradient {
    stops: Vec<GradientStop>,
}

impl TryFrom<RawGradient> for Gradient {
    type Error = PatternError;

    fn try_from(raw: RawGradient) -> PatternResult<Self> {
        Gradient::new(raw.stops)
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::rainbow()
    }
}

impl Gradient {
    /// Build a gradient from stops in any order.
    pub fn new(mut stops: Vec<GradientStop>) -> PatternResult<Self> {
        if stops.is_empty() {
            return Err(PatternError::EmptyGradient);
        }
        for stop in &stops {
            if !stop.position.is_finite() || !(0.0..=1.0).contains(&stop.position) {
                return Err(PatternError::InvalidStop(stop.position));
            }
            if stop.color.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(PatternError::InvalidColor(format!("{:?}", stop.color)));
            }
        }
        // Stable, so stops sharing a position keep their given order.
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(Self { stops })
    }

    /// Two-stop gradient from `start` at 0 to `end` at 1.
    pub fn two_color(start: Rgba, end: Rgba) -> Self {
        Self {
            stops: vec![GradientStop::new(0.0, start), GradientStop::new(1.0, end)],
        }
    }

    /// Rainbow ramp running red, yellow, green, cyan, blue, magenta.
    ///
    /// Channels are 8-bit values so the preset survives a hex round-trip.
    pub fn rainbow() -> Self {
        let stop = |position, r: u8, g: u8, b: u8| {
            GradientStop::new(
                position,
                [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0],
            )
        };
        Self {
            stops: vec![
                stop(0.000, 255, 0, 40),
                stop(0.030, 255, 0, 0),
                stop(0.215, 255, 255, 0),
                stop(0.400, 0, 255, 0),
                stop(0.586, 0, 255, 255),
                stop(0.770, 0, 0, 255),
                stop(0.954, 255, 0, 255),
                stop(1.000, 255, 0, 191),
            ],
        }
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Colour at `t`. Positions outside [0, 1] clamp; positions outside the
    /// stop range take the nearest end stop's colour.
    pub fn sample(&self, t: f32) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return [0.0, 0.0, 0.0, 0.0],
        };
        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }

        // first.position < t < last.position, so 0 < next_idx < len.
        let next_idx = self
            .stops
            .iter()
            .position(|s| s.position >= t)
            .unwrap_or(self.stops.len() - 1);
        let prev = &self.stops[next_idx - 1];
        let next = &self.stops[next_idx];

        let span = next.position - prev.position;
        if span <= 0.0 {
            return next.color;
        }
        let f = (t - prev.position) / span;

        let mut out = [0.0; 4];
        for (c, (a, b)) in out.iter_mut().zip(prev.color.iter().zip(next.color.iter())) {
            *c = lerp(*a, *b, f);
        }
        out
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Encode a colour as `#AARRGGBB`, rounding each channel to 8 bits.
pub fn to_hex(color: Rgba) -> String {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
}

/// Parse `#AARRGGBB` or `#RRGGBB` (opaque).
pub fn from_hex(text: &str) -> PatternResult<Rgba> {
    let invalid = || PatternError::InvalidColor(text.to_string());

    let digits = text.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    let argb = match digits.len() {
        6 => 0xFF00_0000 | value,
        8 => value,
        _ => return Err(invalid()),
    };

    let channel = |shift: u32| ((argb >> shift) & 0xFF) as f32 / 255.0;
    Ok([channel(16), channel(8), channel(0), channel(24)])
}

mod hex_color {
    use super::{from_hex, to_hex, Rgba};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Rgba, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rgba, D::Error> {
        let text = String::deserialize(deserializer)?;
        from_hex(&text).map_err(serde::de::Error::custom)
    }
}
