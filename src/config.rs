use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tuning shared by every camera variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Radians per second at full joystick deflection
    pub rotation_speed: f32,
    /// World units per second
    pub translation_speed: f32,
    /// Distance (arcball) per scroll line
    pub mouse_scroll_sensitivity: f32,
    /// Radians per mouse-delta unit
    pub mouse_pan_sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            rotation_speed: 2.0,
            translation_speed: 3.0,
            mouse_scroll_sensitivity: 0.1,
            mouse_pan_sensitivity: 0.008,
        }
    }
}

/// Which camera variant the scene starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CameraKind {
    FirstPerson,
    Arcball,
    Orthographic,
    #[default]
    Player,
}

/// Scene configuration, loadable from JSON. Missing fields use defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraKind,
    pub camera_position: Vec3,
    pub settings: CameraSettings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraKind::default(),
            camera_position: Vec3::new(0.0, 1.4, -4.0),
            settings: CameraSettings::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid scene config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::info!("Loaded scene config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_tuning() {
        let settings = CameraSettings::default();
        assert_eq!(settings.rotation_speed, 2.0);
        assert_eq!(settings.translation_speed, 3.0);
        assert_eq!(settings.mouse_scroll_sensitivity, 0.1);
        assert_eq!(settings.mouse_pan_sensitivity, 0.008);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SceneConfig::from_json(
            r#"{ "camera": "arcball", "settings": { "translation_speed": 6.0 } }"#,
        )
        .unwrap();

        assert_eq!(config.camera, CameraKind::Arcball);
        assert_eq!(config.camera_position, Vec3::new(0.0, 1.4, -4.0));
        assert_eq!(config.settings.translation_speed, 6.0);
        assert_eq!(config.settings.rotation_speed, 2.0);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(SceneConfig::from_json("{}").unwrap(), SceneConfig::default());
    }

    #[test]
    fn test_bad_json_reports_error() {
        let err = SceneConfig::from_json(r#"{ "camera": "fisheye" }"#).unwrap_err();
        assert!(format!("{err:#}").contains("invalid scene config"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = SceneConfig::load(Path::new("/nonexistent/scene.json")).unwrap_err();
        assert!(format!("{err}").contains("/nonexistent/scene.json"));
    }
}
