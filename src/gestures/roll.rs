use crate::math::rotation_about;
use crate::pov::CenteredPov;

/// Rotation gesture: spins the up vector around the current line of sight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roll {
    initial: CenteredPov,
    sensitivity: f64,
}

impl Roll {
    pub fn new(initial: CenteredPov, sensitivity: f64) -> Self {
        Self {
            initial,
            sensitivity,
        }
    }

    /// `radians` is the cumulative rotation since the gesture began,
    /// counterclockwise positive.
    pub fn changed(&self, current: &CenteredPov, radians: f64) -> Option<CenteredPov> {
        let rotation = rotation_about(current.forward(), -self.sensitivity * radians)?;
        CenteredPov::new(
            current.location(),
            current.center(),
            rotation * self.initial.up(),
        )
        .ok()
    }
}
