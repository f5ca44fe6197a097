use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// External content document. `None` shows the bundled portfolio.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    /// Animate navigation jumps instead of snapping
    #[serde(default = "default_smooth_scroll")]
    pub smooth_scroll: bool,

    /// Height reserved for the fixed navigation bar when jumping to a section
    #[serde(default = "default_nav_offset")]
    pub nav_offset: i32,

    /// A section becomes active once its top edge is at or above this line
    #[serde(default = "default_active_threshold")]
    pub active_threshold: i32,

    #[serde(default = "default_scroll_duration_ms")]
    pub scroll_duration_ms: u64,
}

fn default_window_width() -> i32 {
    1100
}

fn default_window_height() -> i32 {
    760
}

fn default_smooth_scroll() -> bool {
    true
}

fn default_nav_offset() -> i32 {
    80
}

fn default_active_threshold() -> i32 {
    100
}

fn default_scroll_duration_ms() -> u64 {
    450
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            content_path: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
            smooth_scroll: default_smooth_scroll(),
            nav_offset: default_nav_offset(),
            active_threshold: default_active_threshold(),
            scroll_duration_ms: default_scroll_duration_ms(),
        }
    }
}

impl AppSettings {
    /// Load settings from the config directory, or defaults if missing/corrupt
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings {}: {}. Using defaults.", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                // First run: write defaults so the file is discoverable
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    log::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = config_dir();
        path.push("settings.json");
        path
    }
}

/// `<config dir>/folio`, falling back to the working directory.
pub fn config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("folio");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.content_path, None);
        assert_eq!(settings.nav_offset, 80);
        assert_eq!(settings.active_threshold, 100);
        assert!(settings.smooth_scroll);
        assert_eq!(settings.scroll_duration_ms, 450);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"smooth_scroll": false}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert!(!settings.smooth_scroll);
        assert_eq!(settings.window_width, 1100);
    }

    #[test]
    fn test_save_and_load_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            content_path: Some(PathBuf::from("/tmp/me.toml")),
            nav_offset: 64,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}
