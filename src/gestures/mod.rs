//! Gesture-to-pose transformers.
//!
//! Each transformer captures the pose at gesture begin and maps the gesture's
//! cumulative delta to a brand new pose, so repeated small updates cannot drift.

mod radial;
mod roll;
mod turn;

pub use radial::RadialMove;
pub use roll::Roll;
pub use turn::Turn;

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

/// Gesture gains: radians per unit of clip-space travel for pan and scroll,
/// an exponent on the pinch scale, and a multiplier on rotation radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sensitivity {
    pub pan: f64,
    pub scroll: f64,
    pub pinch: f64,
    pub rotation: f64,
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self {
            pan: PI,
            scroll: FRAC_PI_2,
            pinch: 1.0,
            rotation: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Turn,
    RadialMove,
    Roll,
}

/// The single gesture slot: at most one transformer is live at a time.
#[derive(Debug, Clone, Default)]
pub enum ActiveGesture {
    #[default]
    None,
    Turn(Turn),
    RadialMove(RadialMove),
    Roll(Roll),
}

impl ActiveGesture {
    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            ActiveGesture::None => None,
            ActiveGesture::Turn(_) => Some(GestureKind::Turn),
            ActiveGesture::RadialMove(_) => Some(GestureKind::RadialMove),
            ActiveGesture::Roll(_) => Some(GestureKind::Roll),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, ActiveGesture::None)
    }
}
