//! Color string parsing.
//!
//! Two flavours live here:
//!
//! - The tolerant parsers (`parse_*`) accept whatever a caller or a
//!   half-typed input field holds. They try their own shape, then hex, then
//!   the other functional shape, and finally settle on opaque black. They
//!   never fail.
//! - The strict parser behind `str::parse::<Rgba>()` rejects anything it
//!   cannot read exactly and says why.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::{hex_to_rgba, hsla_to_rgba, rgba_to_hsla, round_alpha, Hsla, ParseColorError, Rgba};

static RGBA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*(\d*\.?\d*)\s*,\s*(\d*\.?\d*)\s*,\s*(\d*\.?\d*)\s*(?:,\s*(\d*\.?\d*)\s*)?\)$")
        .expect("valid rgba pattern")
});

static HSLA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^hsla?\(\s*(\d*\.?\d*)(?:deg)?\s*,\s*(\d*\.?\d*)%?\s*,\s*(\d*\.?\d*)%?\s*(?:,\s*(\d*\.?\d*)\s*)?\)$")
        .expect("valid hsla pattern")
});

static STRICT_RGBA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$")
        .expect("valid strict rgba pattern")
});

static STRICT_HSLA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^hsla?\(\s*(\d+(?:\.\d+)?)(?:deg)?\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*(?:,\s*(\d*\.?\d+)\s*)?\)$")
        .expect("valid strict hsla pattern")
});

static SNIFF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:#(?:[0-9a-f]{3}|[0-9a-f]{6}|[0-9a-f]{8})|rgba?\([^()]*\)|hsla?\([^()]*\))$")
        .expect("valid sniff pattern")
});

/// RGBA channels as text, the way numeric input fields hold them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaComponents {
    pub r: String,
    pub g: String,
    pub b: String,
    pub a: String,
}

impl RgbaComponents {
    fn black() -> Self {
        Self::from(Rgba::BLACK)
    }

    /// Numeric view: channels rounded and clamped to `0..=255`, alpha to
    /// `[0, 1]`. Unreadable fields become 0 (alpha 1).
    pub fn to_rgba(&self) -> Rgba {
        Rgba::new(
            channel(&self.r),
            channel(&self.g),
            channel(&self.b),
            alpha(&self.a),
        )
    }
}

impl From<Rgba> for RgbaComponents {
    fn from(rgba: Rgba) -> Self {
        Self {
            r: rgba.r.to_string(),
            g: rgba.g.to_string(),
            b: rgba.b.to_string(),
            a: rgba.a.to_string(),
        }
    }
}

/// HSLA fields as text. Saturation and lightness carry no `%` sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HslaComponents {
    pub h: String,
    pub s: String,
    pub l: String,
    pub a: String,
}

impl HslaComponents {
    fn black() -> Self {
        Self::from(Hsla::new(0.0, 0.0, 0.0, 1.0))
    }

    /// Numeric view: hue clamped to `0..=360`, saturation and lightness to
    /// `0..=100`, alpha to `[0, 1]`.
    pub fn to_hsla(&self) -> Hsla {
        Hsla::new(
            number(&self.h).unwrap_or(0.0).clamp(0.0, 360.0),
            number(&self.s).unwrap_or(0.0).clamp(0.0, 100.0),
            number(&self.l).unwrap_or(0.0).clamp(0.0, 100.0),
            alpha(&self.a),
        )
    }
}

impl From<Hsla> for HslaComponents {
    fn from(hsla: Hsla) -> Self {
        Self {
            h: hsla.h.to_string(),
            s: hsla.s.to_string(),
            l: hsla.l.to_string(),
            a: hsla.a.to_string(),
        }
    }
}

/// Split a color string into RGBA fields.
///
/// Tries `rgb()`/`rgba()`, then hex, then `hsl()`/`hsla()` (converted), and
/// falls back to opaque black.
pub fn parse_rgba_components(input: &str) -> RgbaComponents {
    let input = input.trim();

    if let Some(caps) = RGBA_PATTERN.captures(input) {
        let field = |i: usize, default: &str| {
            caps.get(i)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        return RgbaComponents {
            r: field(1, "0"),
            g: field(2, "0"),
            b: field(3, "0"),
            a: field(4, "1"),
        };
    }

    if let Some(rgba) = hex_to_rgba(input) {
        return RgbaComponents::from(rgba);
    }

    if HSLA_PATTERN.is_match(input) {
        let hsla = parse_hsla_components(input).to_hsla();
        return RgbaComponents::from(hsla_to_rgba(hsla));
    }

    log::trace!("unparseable rgba input {input:?}, using black");
    RgbaComponents::black()
}

/// Split a color string into HSLA fields.
///
/// Tries `hsl()`/`hsla()`, then hex (converted), then `rgb()`/`rgba()`
/// (converted), and falls back to black.
pub fn parse_hsla_components(input: &str) -> HslaComponents {
    let input = input.trim();

    if let Some(caps) = HSLA_PATTERN.captures(input) {
        let field = |i: usize, default: &str| {
            caps.get(i)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        return HslaComponents {
            h: field(1, "0"),
            s: field(2, "0"),
            l: field(3, "0"),
            a: field(4, "1"),
        };
    }

    if let Some(rgba) = hex_to_rgba(input) {
        return HslaComponents::from(rgba_to_hsla(rgba));
    }

    if RGBA_PATTERN.is_match(input) {
        let rgba = parse_rgba_components(input).to_rgba();
        return HslaComponents::from(rgba_to_hsla(rgba));
    }

    log::trace!("unparseable hsla input {input:?}, using black");
    HslaComponents::black()
}

/// Tolerant parse straight to the canonical color.
pub fn parse_rgba(input: &str) -> Rgba {
    parse_rgba_components(input).to_rgba()
}

/// Tolerant parse to HSLA.
pub fn parse_hsla(input: &str) -> Hsla {
    parse_hsla_components(input).to_hsla()
}

/// Whether `input` has the rough shape of a hex, rgb or hsl color.
pub fn is_color_string(input: &str) -> bool {
    SNIFF_PATTERN.is_match(input.trim())
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }

        if s.starts_with('#') {
            return hex_to_rgba(s).ok_or_else(|| ParseColorError::Unrecognized(s.to_string()));
        }

        if let Some(caps) = STRICT_RGBA_PATTERN.captures(s) {
            let r = strict_component(caps.get(1).map(|m| m.as_str()), "red", 255.0)?;
            let g = strict_component(caps.get(2).map(|m| m.as_str()), "green", 255.0)?;
            let b = strict_component(caps.get(3).map(|m| m.as_str()), "blue", 255.0)?;
            let a = match caps.get(4) {
                Some(m) => strict_component(Some(m.as_str()), "alpha", 1.0)?,
                None => 1.0,
            };
            return Ok(Rgba::new(r as u8, g as u8, b as u8, round_alpha(a)));
        }

        if let Some(caps) = STRICT_HSLA_PATTERN.captures(s) {
            let h = strict_component(caps.get(1).map(|m| m.as_str()), "hue", 360.0)?;
            let sat = strict_component(caps.get(2).map(|m| m.as_str()), "saturation", 100.0)?;
            let l = strict_component(caps.get(3).map(|m| m.as_str()), "lightness", 100.0)?;
            let a = match caps.get(4) {
                Some(m) => strict_component(Some(m.as_str()), "alpha", 1.0)?,
                None => 1.0,
            };
            return Ok(hsla_to_rgba(Hsla::new(h, sat, l, round_alpha(a))));
        }

        // Bare hex without the leading '#'
        hex_to_rgba(s).ok_or_else(|| ParseColorError::Unrecognized(s.to_string()))
    }
}

fn strict_component(
    text: Option<&str>,
    component: &'static str,
    max: f64,
) -> Result<f64, ParseColorError> {
    let text = text.ok_or(ParseColorError::Empty)?;
    let value: f64 = text
        .parse()
        .map_err(|_| ParseColorError::Unrecognized(text.to_string()))?;
    if !(0.0..=max).contains(&value) {
        return Err(ParseColorError::OutOfRange {
            component,
            value,
            min: 0.0,
            max,
        });
    }
    Ok(value)
}

fn number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn channel(text: &str) -> u8 {
    number(text).unwrap_or(0.0).round().clamp(0.0, 255.0) as u8
}

fn alpha(text: &str) -> f64 {
    number(text).map(round_alpha).unwrap_or(1.0)
}
