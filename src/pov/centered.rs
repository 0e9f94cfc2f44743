use std::hash::{Hash, Hasher};

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use super::PovError;
use crate::math::{look_at, orthonormalize, try_normalize};

/// A pose aimed at a look-at point.
///
/// `up` is stored already orthonormalized against the forward direction; the raw
/// hint passed to the constructor is never kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CenteredPovRecord")]
pub struct CenteredPov {
    location: DVec3,
    center: DVec3,
    up: DVec3,
}

#[derive(Deserialize)]
struct CenteredPovRecord {
    location: DVec3,
    center: DVec3,
    up: DVec3,
}

impl TryFrom<CenteredPovRecord> for CenteredPov {
    type Error = PovError;

    fn try_from(record: CenteredPovRecord) -> Result<Self, Self::Error> {
        CenteredPov::new(record.location, record.center, record.up)
    }
}

impl CenteredPov {
    pub fn new(location: DVec3, center: DVec3, up: DVec3) -> Result<Self, PovError> {
        if !(location.is_finite() && center.is_finite() && up.is_finite()) {
            return Err(PovError::NonFinite);
        }
        let forward = try_normalize(center - location).ok_or(PovError::CoincidentCenter)?;
        let up = orthonormalize(up, forward).ok_or(PovError::DegenerateUp)?;
        Ok(Self {
            location,
            center,
            up,
        })
    }

    /// Like [`CenteredPov::new`], but a degenerate up hint is replaced by an
    /// arbitrary vector perpendicular to the forward direction.
    pub fn with_any_up(location: DVec3, center: DVec3, up: DVec3) -> Result<Self, PovError> {
        match Self::new(location, center, up) {
            Err(PovError::DegenerateUp) => {
                let forward =
                    try_normalize(center - location).ok_or(PovError::CoincidentCenter)?;
                Self::new(location, center, forward.any_orthonormal_vector())
            }
            result => result,
        }
    }

    pub fn location(&self) -> DVec3 {
        self.location
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn up(&self) -> DVec3 {
        self.up
    }

    pub fn forward(&self) -> DVec3 {
        (self.center - self.location).normalize()
    }

    pub fn right(&self) -> DVec3 {
        self.forward().cross(self.up)
    }

    /// Distance from the camera to its look-at point.
    pub fn distance(&self) -> f64 {
        self.location.distance(self.center)
    }

    pub fn with_location(&self, location: DVec3) -> Result<Self, PovError> {
        Self::new(location, self.center, self.up)
    }

    pub fn with_center(&self, center: DVec3) -> Result<Self, PovError> {
        Self::new(self.location, center, self.up)
    }

    pub fn with_up(&self, up: DVec3) -> Result<Self, PovError> {
        Self::new(self.location, self.center, up)
    }

    /// Componentwise linear interpolation toward `other`; the interpolated up
    /// vector goes back through the constructor.
    pub fn lerp(&self, other: &CenteredPov, t: f64) -> Result<Self, PovError> {
        Self::with_any_up(
            self.location.lerp(other.location, t),
            self.center.lerp(other.center, t),
            self.up.lerp(other.up, t),
        )
    }

    pub fn view_matrix(&self) -> DMat4 {
        look_at(self.location, self.center, self.up)
    }

    /// True when every stored vector is within `tolerance` of `other`'s.
    pub fn abs_diff_eq(&self, other: &CenteredPov, tolerance: f64) -> bool {
        self.location.abs_diff_eq(other.location, tolerance)
            && self.center.abs_diff_eq(other.center, tolerance)
            && self.up.abs_diff_eq(other.up, tolerance)
    }
}

impl Default for CenteredPov {
    fn default() -> Self {
        Self {
            location: DVec3::new(0.0, 0.0, -1.0),
            center: DVec3::ZERO,
            up: DVec3::Y,
        }
    }
}

// Constructors reject NaN, so bitwise hashing agrees with `==` once -0.0 is folded into 0.0.
impl Eq for CenteredPov {}

impl Hash for CenteredPov {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in [self.location, self.center, self.up] {
            for c in v.to_array() {
                (c + 0.0).to_bits().hash(state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{is_orthogonal, is_unit};
    use std::collections::HashSet;

    #[test]
    fn test_up_is_orthonormalized() {
        let pov = CenteredPov::new(
            DVec3::new(0.0, 0.0, -5.0),
            DVec3::ZERO,
            DVec3::new(0.0, 3.0, 1.0),
        )
        .unwrap();
        assert!(is_unit(pov.up()));
        assert!(is_unit(pov.forward()));
        assert!(is_orthogonal(pov.up(), pov.forward()));
        assert!((pov.up() - DVec3::Y).length() < 1e-12);
    }

    #[test]
    fn test_rejects_coincident_center() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(CenteredPov::new(p, p, DVec3::Y), Err(PovError::CoincidentCenter));
    }

    #[test]
    fn test_rejects_parallel_up() {
        let result = CenteredPov::new(DVec3::new(0.0, -2.0, 0.0), DVec3::ZERO, DVec3::Y);
        assert_eq!(result, Err(PovError::DegenerateUp));
    }

    #[test]
    fn test_with_any_up_recovers() {
        let pov = CenteredPov::with_any_up(DVec3::new(0.0, -2.0, 0.0), DVec3::ZERO, DVec3::Y)
            .unwrap();
        assert!(is_orthogonal(pov.up(), pov.forward()));
        assert!(is_unit(pov.up()));
    }

    #[test]
    fn test_rejects_nan() {
        let result = CenteredPov::new(DVec3::new(f64::NAN, 0.0, 0.0), DVec3::ZERO, DVec3::Y);
        assert_eq!(result, Err(PovError::NonFinite));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = CenteredPov::default();
        let b = CenteredPov::new(DVec3::new(0.0, 0.0, -2.0), DVec3::ZERO, DVec3::Y).unwrap();
        assert_eq!(a.lerp(&b, 0.0).unwrap(), a);
        assert_eq!(a.lerp(&b, 1.0).unwrap(), b);
        let mid = a.lerp(&b, 0.5).unwrap();
        assert!((mid.location() - DVec3::new(0.0, 0.0, -1.5)).length() < 1e-12);
    }

    #[test]
    fn test_hash_matches_eq() {
        let a = CenteredPov::default();
        let b = CenteredPov::new(DVec3::new(0.0, 0.0, -1.0), DVec3::new(0.0, -0.0, 0.0), DVec3::Y)
            .unwrap();
        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serde_keyed_fields() {
        let pov = CenteredPov::default();
        let json = serde_json::to_string(&pov).unwrap();
        assert!(json.contains("\"location\""));
        assert!(json.contains("\"center\""));
        assert!(json.contains("\"up\""));
        let back: CenteredPov = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pov);
    }

    #[test]
    fn test_deserialize_reorthonormalizes_and_validates() {
        let pov: CenteredPov =
            serde_json::from_str(r#"{"location":[0,0,-1],"center":[0,0,0],"up":[0,2,5]}"#)
                .unwrap();
        assert!((pov.up() - DVec3::Y).length() < 1e-12);

        let bad = serde_json::from_str::<CenteredPov>(
            r#"{"location":[0,0,0],"center":[0,0,0],"up":[0,1,0]}"#,
        );
        assert!(bad.is_err());
    }
}
