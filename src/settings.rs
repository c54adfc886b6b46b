//! User preferences
//!
//! Persisted as JSON next to the working directory, separately from any game
//! state. Missing or unreadable settings fall back to defaults; gameplay
//! constants never live here (see `consts`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Display preferences for the terminal frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Use terminal colors (plain monochrome when off)
    #[serde(default = "default_true")]
    pub color: bool,
    /// Show the score line in the top-left corner
    #[serde(default = "default_true")]
    pub show_score: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            show_score: true,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "dodge-the-roar.json";

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or malformed. Preferences are never fatal.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to `path`.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = Settings::load(Path::new("/nonexistent/settings.json"));
        assert!(settings.color);
        assert!(settings.show_score);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"color": false}"#).unwrap();
        assert!(!settings.color);
        assert!(settings.show_score);
    }
}
