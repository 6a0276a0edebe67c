//! The `config.json` file.
//!
//! Every key is optional. A missing file means defaults.
//!
//! ```json
//! {
//!   "color": "#3f51b5",
//!   "convert_to": "hsl",
//!   "picker": { "show_alpha": false, "presets": ["#000000", "#ffffff"] }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use swatch::{DisplayFormat, PickerConfig};
use thiserror::Error;

use crate::paths;

/// Color used by `pick` when none is given.
const DEFAULT_COLOR: &str = "#000000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Starting color for `pick`.
    pub color: String,
    /// Output format for `convert` when `--to` is not given.
    pub convert_to: DisplayFormat,
    pub picker: PickerConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            convert_to: DisplayFormat::default(),
            picker: PickerConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the platform config directory.
    pub fn load_default() -> Result<Self, ConfigError> {
        match paths::config_file() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch::TriggerMode;

    fn write_config(text: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, text).unwrap();
        (dir, path)
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let (_dir, path) = write_config(r#"{ "picker": { "show_alpha": false } }"#);
        let config = CliConfig::load(&path).unwrap();

        assert!(!config.picker.show_alpha);
        assert!(config.picker.show_presets);
        assert_eq!(config.picker.presets.len(), swatch::DEFAULT_PRESETS.len());
        assert_eq!(config.color, "#000000");
        assert_eq!(config.convert_to, DisplayFormat::Hex);
    }

    #[test]
    fn test_full_file() {
        let (_dir, path) = write_config(
            r##"{
                "color": "rgb(1, 2, 3)",
                "convert_to": "hsl",
                "picker": {
                    "presets": ["#123456"],
                    "trigger_mode": "icon"
                }
            }"##,
        );
        let config = CliConfig::load(&path).unwrap();

        assert_eq!(config.color, "rgb(1, 2, 3)");
        assert_eq!(config.convert_to, DisplayFormat::Hsl);
        assert_eq!(config.picker.presets, vec!["#123456".to_string()]);
        assert_eq!(config.picker.trigger_mode, TriggerMode::Icon);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let (_dir, path) = write_config("{ not json");
        let err = CliConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn test_unknown_format_is_error() {
        let (_dir, path) = write_config(r#"{ "convert_to": "cmyk" }"#);
        assert!(matches!(
            CliConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
