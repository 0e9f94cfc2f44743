//! Perspective projection paired with the pose controller.

use glam::{DMat4, Mat4};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::perspective;
use crate::pov::CenteredPov;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FovError {
    #[error("vertical field of view must be in (0, 180) degrees, got {0}")]
    FieldOfView(f64),
    #[error("clip planes must satisfy 0 < near < far, got near {near} far {far}")]
    ClipPlanes { near: f64, far: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FovSettings {
    pub fov_y_degrees: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for FovSettings {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.01,
            far: 1000.0,
        }
    }
}

impl FovSettings {
    pub fn validate(&self) -> Result<(), FovError> {
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(FovError::FieldOfView(self.fov_y_degrees));
        }
        if !(self.near > 0.0 && self.far > self.near && self.far.is_finite()) {
            return Err(FovError::ClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovController {
    settings: FovSettings,
    viewport: (u32, u32),
}

impl FovController {
    pub fn new(settings: FovSettings) -> Result<Self, FovError> {
        settings.validate()?;
        Ok(Self {
            settings,
            viewport: (1, 1),
        })
    }

    pub fn settings(&self) -> &FovSettings {
        &self.settings
    }

    pub fn set_fov_y_degrees(&mut self, degrees: f64) -> Result<(), FovError> {
        let settings = FovSettings {
            fov_y_degrees: degrees,
            ..self.settings
        };
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Viewport size in pixels.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn aspect_ratio(&self) -> f64 {
        let (width, height) = self.viewport;
        if width == 0 || height == 0 {
            1.0
        } else {
            f64::from(width) / f64::from(height)
        }
    }

    pub fn projection_matrix(&self) -> DMat4 {
        perspective(
            self.settings.fov_y_degrees.to_radians(),
            self.aspect_ratio(),
            self.settings.near,
            self.settings.far,
        )
    }

    pub fn projection_matrix_f32(&self) -> Mat4 {
        self.projection_matrix().as_mat4()
    }

    pub fn view_projection(&self, pov: &CenteredPov) -> DMat4 {
        self.projection_matrix() * pov.view_matrix()
    }
}

impl Default for FovController {
    fn default() -> Self {
        Self {
            settings: FovSettings::default(),
            viewport: (1, 1),
        }
    }
}
