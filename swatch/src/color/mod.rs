//! Color model and conversions.
//!
//! [`Rgba`] is the canonical representation. Every other view ([`Hsla`],
//! [`Hsv`], hex text) is derived from it on demand and never stored on its
//! own, so repeated conversions cannot drift.
//!
//! # Example
//!
//! ```
//! use swatch::color::{hex_to_rgba, rgb_to_hsv, rgba_to_hex};
//!
//! let rgba = hex_to_rgba("#ff5500").unwrap();
//! let hsv = rgb_to_hsv(rgba.rgb());
//! assert_eq!(hsv.h.round(), 20.0);
//! assert_eq!(rgba_to_hex(rgba), "#ff5500");
//! ```

mod convert;
mod error;
pub mod parse;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use convert::{
    hex_to_rgba, hsla_to_rgba, hsv_to_rgb, rgb_to_hsv, rgba_to_hex, rgba_to_hsla, round_alpha,
};
pub use error::ParseColorError;

/// An opaque 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel.
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

/// The canonical color: 8-bit channels plus alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    /// Opaque black, the fallback for anything unparseable.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Drop the alpha channel.
    pub const fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Copy of this color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Serialize as `rgba(r, g, b, a)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Serialize as `#rrggbb` or `#rrggbbaa`.
    pub fn to_hex(&self) -> String {
        rgba_to_hex(*self)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Hue in degrees, saturation and lightness in percent, alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Serialize as `hsla(h, s%, l%, a)`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.l, self.a)
    }
}

/// Hue in degrees, saturation and value in percent. Kept unrounded so that
/// the 2-D surface can round-trip a color without losing a channel unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// Which textual shape the picker emits and which fields it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl DisplayFormat {
    pub const ALL: [DisplayFormat; 3] = [Self::Hex, Self::Rgb, Self::Hsl];

    /// Pick a format from a color string's prefix: `rgb...` and `hsl...` map
    /// to their formats, everything else is hex.
    pub fn detect(value: &str) -> Self {
        let value = value.trim_start();
        let prefix = value.get(..3).map(str::to_ascii_lowercase);
        match prefix.as_deref() {
            Some("rgb") => Self::Rgb,
            Some("hsl") => Self::Hsl,
            _ => Self::Hex,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
        }
    }

    /// Render a canonical color in this format.
    pub fn format(&self, rgba: Rgba) -> String {
        match self {
            Self::Hex => rgba_to_hex(rgba),
            Self::Rgb => rgba.to_css(),
            Self::Hsl => rgba_to_hsla(rgba).to_css(),
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
