//! Game settings
//!
//! Session tunables, loaded from a JSON file next to the binary. A missing
//! or malformed file is not an error: the loader logs and falls back to the
//! defaults from `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    GAME_DURATION_SECS, HOLE_COUNT, PORTAL_COUNT, SURFACE_HEIGHT, SURFACE_WIDTH,
};

/// Session tunables consumed by `World::new`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rendering surface dimensions in pixels
    pub surface_width: f32,
    pub surface_height: f32,
    /// Holes alive at any moment
    pub hole_count: usize,
    /// Portal pairs on the surface
    pub portal_count: usize,
    /// Countdown duration in seconds
    pub duration_secs: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            hole_count: HOLE_COUNT,
            portal_count: PORTAL_COUNT,
            duration_secs: GAME_DURATION_SECS,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults on any
    /// failure (missing file, bad JSON).
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_game_constants() {
        let settings = Settings::default();
        assert_eq!(settings.hole_count, 10);
        assert_eq!(settings.portal_count, 3);
        assert_eq!(settings.duration_secs, 60);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/nonexistent/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults_for_the_rest() {
        let settings: Settings = serde_json::from_str(r#"{"duration_secs": 30}"#).unwrap();
        assert_eq!(settings.duration_secs, 30);
        assert_eq!(settings.hole_count, 10);
    }
}
