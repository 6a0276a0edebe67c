//! Picker configuration.

use serde::{Deserialize, Serialize};

/// Swatches offered when the caller supplies none.
pub const DEFAULT_PRESETS: &[&str] = &[
    "#000000", "#ffffff", "#f44336", "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3",
    "#03a9f4", "#009688", "#4caf50", "#8bc34a", "#ffeb3b", "#ffc107", "#ff9800", "#795548",
];

/// What the closed picker shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    /// The color string only.
    Text,
    /// A color swatch only.
    Icon,
    /// Swatch followed by the color string.
    #[default]
    Both,
}

impl TriggerMode {
    pub fn shows_swatch(&self) -> bool {
        matches!(self, Self::Icon | Self::Both)
    }

    pub fn shows_text(&self) -> bool {
        matches!(self, Self::Text | Self::Both)
    }
}

/// Per-picker options.
///
/// Deserializes with defaults for every missing key, so a partial config
/// file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Show the alpha slider and alpha field.
    pub show_alpha: bool,
    /// Show the preset row.
    pub show_presets: bool,
    /// Preset swatches (hex strings), in display order.
    pub presets: Vec<String>,
    pub trigger_mode: TriggerMode,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            show_alpha: true,
            show_presets: true,
            presets: DEFAULT_PRESETS.iter().map(|s| s.to_string()).collect(),
            trigger_mode: TriggerMode::default(),
        }
    }
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_alpha(mut self, show: bool) -> Self {
        self.show_alpha = show;
        self
    }

    pub fn show_presets(mut self, show: bool) -> Self {
        self.show_presets = show;
        self
    }

    /// Replace the preset list.
    pub fn presets<I, S>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.presets = presets.into_iter().map(Into::into).collect();
        self
    }

    pub fn trigger_mode(mut self, mode: TriggerMode) -> Self {
        self.trigger_mode = mode;
        self
    }
}
