//! Camera poses ("points of view").
//!
//! Two representations exist. [`CenteredPov`] aims at a look-at point and is the
//! one driven by the controller; [`FreeForwardPov`] carries an explicit forward
//! direction for consumers that have no natural target. Both keep `forward` and
//! `up` unit length and mutually orthogonal whenever they are read.

mod centered;
mod free;

pub use centered::CenteredPov;
pub use free::FreeForwardPov;

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a pose could not be built from the given vectors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PovError {
    #[error("pose vectors must be finite")]
    NonFinite,
    #[error("location and center coincide, no forward direction")]
    CoincidentCenter,
    #[error("forward direction has zero length")]
    DegenerateForward,
    #[error("up hint is zero or parallel to the forward direction")]
    DegenerateUp,
    #[error("{0} vector is not unit length")]
    NotUnitLength(&'static str),
    #[error("forward and up vectors are not orthogonal")]
    NotOrthogonal,
}

/// Either pose representation, for code that renders from both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pov {
    Centered(CenteredPov),
    FreeForward(FreeForwardPov),
}

impl Pov {
    pub fn location(&self) -> DVec3 {
        match self {
            Pov::Centered(pov) => pov.location(),
            Pov::FreeForward(pov) => pov.location(),
        }
    }

    pub fn forward(&self) -> DVec3 {
        match self {
            Pov::Centered(pov) => pov.forward(),
            Pov::FreeForward(pov) => pov.forward(),
        }
    }

    pub fn up(&self) -> DVec3 {
        match self {
            Pov::Centered(pov) => pov.up(),
            Pov::FreeForward(pov) => pov.up(),
        }
    }

    pub fn view_matrix(&self) -> DMat4 {
        match self {
            Pov::Centered(pov) => pov.view_matrix(),
            Pov::FreeForward(pov) => pov.view_matrix(),
        }
    }
}

impl From<CenteredPov> for Pov {
    fn from(pov: CenteredPov) -> Self {
        Pov::Centered(pov)
    }
}

impl From<FreeForwardPov> for Pov {
    fn from(pov: FreeForwardPov) -> Self {
        Pov::FreeForward(pov)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pov_dispatch() {
        let centered = CenteredPov::default();
        let pov = Pov::from(centered);
        assert_eq!(pov.location(), centered.location());
        assert_eq!(pov.forward(), centered.forward());

        let free = FreeForwardPov::default();
        let pov = Pov::from(free);
        assert_eq!(pov.up(), free.up());
    }

    #[test]
    fn test_pov_json_is_tagged() {
        let json = serde_json::to_value(Pov::from(CenteredPov::default())).unwrap();
        assert_eq!(json["kind"], "centered");
        assert!(json.get("center").is_some());

        let json = serde_json::to_value(Pov::from(FreeForwardPov::default())).unwrap();
        assert_eq!(json["kind"], "free_forward");
        assert!(json.get("forward").is_some());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PovError::NotUnitLength("up").to_string(),
            "up vector is not unit length"
        );
    }
}
