//! Settings for the controller and projection, loadable from JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::flight::FlightConstants;
use crate::fov::FovSettings;
use crate::gestures::Sensitivity;
use crate::pov::CenteredPov;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    pub default_pov: CenteredPov,
    pub orbit_enabled: bool,
    /// Radians per second; positive is prograde.
    pub orbit_speed: f64,
    pub flight: FlightConstants,
    pub sensitivity: Sensitivity,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            default_pov: CenteredPov::default(),
            orbit_enabled: false,
            orbit_speed: 0.1,
            flight: FlightConstants::default(),
            sensitivity: Sensitivity::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub controller: ControllerSettings,
    pub fov: FovSettings,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(text).context("Failed to parse settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.controller
            .flight
            .validate()
            .context("Invalid flight constants")?;
        anyhow::ensure!(
            self.controller.orbit_speed.is_finite(),
            "orbit speed must be finite, got {}",
            self.controller.orbit_speed
        );
        self.fov.validate().context("Invalid field of view")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = Settings::from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json_str(
            r#"{
                "controller": {
                    "orbit_enabled": true,
                    "default_pov": {"location": [0, 0, -3], "center": [0, 0, 0], "up": [0, 1, 0]},
                    "flight": {"max_speed": 4.0}
                },
                "fov": {"fov_y_degrees": 45}
            }"#,
        )
        .unwrap();
        assert!(settings.controller.orbit_enabled);
        assert_eq!(settings.controller.default_pov.location(), DVec3::new(0.0, 0.0, -3.0));
        assert_eq!(settings.controller.flight.max_speed, 4.0);
        assert_eq!(settings.controller.flight.acceleration, 6.0);
        assert_eq!(settings.fov.fov_y_degrees, 45.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(
            Settings::from_json_str(r#"{"controller": {"flight": {"coasting_threshold": 2}}}"#)
                .is_err()
        );
        assert!(Settings::from_json_str(r#"{"fov": {"near": 0}}"#).is_err());
        let coincident = r#"{"controller": {"default_pov": {
            "location": [1,1,1], "center": [1,1,1], "up": [0,1,0]
        }}}"#;
        assert!(Settings::from_json_str(coincident).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/pov-settings.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read settings file"));
    }
}
