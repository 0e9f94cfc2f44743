use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use super::{CenteredPov, PovError};
use crate::math::{is_orthogonal, is_unit, look_to, orthonormalize, try_normalize};

/// A pose with an explicit forward direction instead of a look-at point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FreeForwardPovRecord")]
pub struct FreeForwardPov {
    location: DVec3,
    forward: DVec3,
    up: DVec3,
}

#[derive(Deserialize)]
struct FreeForwardPovRecord {
    location: DVec3,
    forward: DVec3,
    up: DVec3,
}

impl TryFrom<FreeForwardPovRecord> for FreeForwardPov {
    type Error = PovError;

    fn try_from(record: FreeForwardPovRecord) -> Result<Self, Self::Error> {
        FreeForwardPov::from_basis(record.location, record.forward, record.up)
    }
}

impl FreeForwardPov {
    /// Builds a pose from any non-zero forward direction and an up hint.
    pub fn new(location: DVec3, forward: DVec3, up_hint: DVec3) -> Result<Self, PovError> {
        if !(location.is_finite() && forward.is_finite() && up_hint.is_finite()) {
            return Err(PovError::NonFinite);
        }
        let forward = try_normalize(forward).ok_or(PovError::DegenerateForward)?;
        let up = orthonormalize(up_hint, forward).ok_or(PovError::DegenerateUp)?;
        Ok(Self {
            location,
            forward,
            up,
        })
    }

    /// Low-level constructor: `forward` and `up` must already be an orthonormal pair.
    pub fn from_basis(location: DVec3, forward: DVec3, up: DVec3) -> Result<Self, PovError> {
        if !(location.is_finite() && forward.is_finite() && up.is_finite()) {
            return Err(PovError::NonFinite);
        }
        if !is_unit(forward) {
            return Err(PovError::NotUnitLength("forward"));
        }
        if !is_unit(up) {
            return Err(PovError::NotUnitLength("up"));
        }
        if !is_orthogonal(forward, up) {
            return Err(PovError::NotOrthogonal);
        }
        Ok(Self {
            location,
            forward,
            up,
        })
    }

    /// [`FreeForwardPov::from_basis`], substituting the default pose when the
    /// basis is invalid so that a bad basis never reaches rendering.
    pub fn from_basis_or_default(location: DVec3, forward: DVec3, up: DVec3) -> Self {
        Self::from_basis(location, forward, up).unwrap_or_else(|err| {
            log::warn!(
                "invalid pov basis (forward {forward:?}, up {up:?}): {err}; using default pov"
            );
            Self::default()
        })
    }

    pub fn location(&self) -> DVec3 {
        self.location
    }

    pub fn forward(&self) -> DVec3 {
        self.forward
    }

    pub fn up(&self) -> DVec3 {
        self.up
    }

    pub fn right(&self) -> DVec3 {
        self.forward.cross(self.up)
    }

    /// Centered pose looking at the point `distance` ahead.
    pub fn to_centered(&self, distance: f64) -> Result<CenteredPov, PovError> {
        CenteredPov::new(self.location, self.location + self.forward * distance, self.up)
    }

    pub fn view_matrix(&self) -> DMat4 {
        look_to(self.location, self.forward, self.up)
    }
}

impl Default for FreeForwardPov {
    fn default() -> Self {
        Self {
            location: DVec3::new(0.0, 0.0, -1.0),
            forward: DVec3::Z,
            up: DVec3::Y,
        }
    }
}

impl From<CenteredPov> for FreeForwardPov {
    fn from(pov: CenteredPov) -> Self {
        Self {
            location: pov.location(),
            forward: pov.forward(),
            up: pov.up(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_up_from_hint() {
        let pov = FreeForwardPov::new(
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, 3.0),
            DVec3::new(1.0, 1.0, 0.0),
        )
        .unwrap();
        assert!(is_unit(pov.forward()));
        assert!(is_unit(pov.up()));
        assert!(is_orthogonal(pov.forward(), pov.up()));
    }

    #[test]
    fn test_new_rejects_zero_forward() {
        let result = FreeForwardPov::new(DVec3::ZERO, DVec3::ZERO, DVec3::Y);
        assert_eq!(result, Err(PovError::DegenerateForward));
    }

    #[test]
    fn test_from_basis_validates() {
        assert_eq!(
            FreeForwardPov::from_basis(DVec3::ZERO, DVec3::new(0.0, 0.0, 2.0), DVec3::Y),
            Err(PovError::NotUnitLength("forward"))
        );
        assert_eq!(
            FreeForwardPov::from_basis(DVec3::ZERO, DVec3::Z, DVec3::new(0.0, 0.5, 0.0)),
            Err(PovError::NotUnitLength("up"))
        );
        assert_eq!(
            FreeForwardPov::from_basis(DVec3::ZERO, DVec3::Z, DVec3::new(0.0, 0.6, 0.8)),
            Err(PovError::NotOrthogonal)
        );
        assert!(FreeForwardPov::from_basis(DVec3::ONE, DVec3::X, DVec3::Y).is_ok());
    }

    #[test]
    fn test_from_basis_or_default_substitutes() {
        let pov = FreeForwardPov::from_basis_or_default(DVec3::ONE, DVec3::Z, DVec3::Z);
        assert_eq!(pov, FreeForwardPov::default());
        assert_eq!(pov.location(), DVec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_centered_conversion() {
        let centered = CenteredPov::default();
        let free = FreeForwardPov::from(centered);
        assert_eq!(free, FreeForwardPov::default());
        let back = free.to_centered(1.0).unwrap();
        assert!(back.abs_diff_eq(&centered, 1e-12));
    }

    #[test]
    fn test_deserialize_rejects_bad_basis() {
        let bad = serde_json::from_str::<FreeForwardPov>(
            r#"{"location":[0,0,0],"forward":[0,0,2],"up":[0,1,0]}"#,
        );
        assert!(bad.is_err());
    }
}
