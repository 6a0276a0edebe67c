//! Numeric and hex input fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::{round_alpha, DisplayFormat};

// Partial numbers while typing: "", ".", "12", "12.", ".5"
static NUMBER_DRAFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d*$").expect("valid number draft pattern"));

static ALPHA_DRAFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d{0,2}$").expect("valid alpha draft pattern"));

static HEX_DRAFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]*$").expect("valid hex draft pattern"));

/// Longest hex text accepted while typing (`#` plus eight digits).
const HEX_DRAFT_MAX_LEN: usize = 9;

/// One numeric input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Lightness,
    Alpha,
}

impl Field {
    /// Fields shown for a format, in display order. Hex has none; it uses the
    /// hex text field instead.
    pub fn for_format(format: DisplayFormat, show_alpha: bool) -> &'static [Field] {
        match (format, show_alpha) {
            (DisplayFormat::Hex, _) => &[],
            (DisplayFormat::Rgb, true) => &[Self::Red, Self::Green, Self::Blue, Self::Alpha],
            (DisplayFormat::Rgb, false) => &[Self::Red, Self::Green, Self::Blue],
            (DisplayFormat::Hsl, true) => {
                &[Self::Hue, Self::Saturation, Self::Lightness, Self::Alpha]
            }
            (DisplayFormat::Hsl, false) => &[Self::Hue, Self::Saturation, Self::Lightness],
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
            Self::Hue => "H",
            Self::Saturation => "S",
            Self::Lightness => "L",
            Self::Alpha => "A",
        }
    }

    /// Upper bound of the field's range (the lower bound is always 0).
    pub const fn max(&self) -> f64 {
        match self {
            Self::Red | Self::Green | Self::Blue => 255.0,
            Self::Hue => 360.0,
            Self::Saturation | Self::Lightness => 100.0,
            Self::Alpha => 1.0,
        }
    }
}

/// Outcome of reading a field's text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldInput {
    /// Not a number in progress; the edit is dropped.
    Invalid,
    /// Could become a number ("" or "."); nothing to emit yet.
    Pending,
    /// A complete value, already clamped (and rounded for integer fields).
    Value(f64),
}

/// Validate and clamp a field edit.
pub fn read_field(field: Field, text: &str) -> FieldInput {
    let text = text.trim();
    let pattern = match field {
        Field::Alpha => &*ALPHA_DRAFT,
        _ => &*NUMBER_DRAFT,
    };
    if !pattern.is_match(text) {
        return FieldInput::Invalid;
    }

    let Ok(value) = text.parse::<f64>() else {
        return FieldInput::Pending;
    };

    let value = match field {
        Field::Alpha => round_alpha(value),
        _ => value.round().clamp(0.0, field.max()),
    };
    FieldInput::Value(value)
}

/// Whether `text` may stand in the hex field while the user types.
pub fn is_hex_draft(text: &str) -> bool {
    text.len() <= HEX_DRAFT_MAX_LEN && HEX_DRAFT.is_match(text)
}
