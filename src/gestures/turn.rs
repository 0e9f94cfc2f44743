use crate::math::rotation_about;
use crate::pov::CenteredPov;

/// Drag gesture: pan orbits around the up axis through the center, scroll
/// tilts over the right axis. The center never moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn {
    initial: CenteredPov,
    pan_sensitivity: f64,
    scroll_sensitivity: f64,
}

impl Turn {
    pub fn new(initial: CenteredPov, pan_sensitivity: f64, scroll_sensitivity: f64) -> Self {
        Self {
            initial,
            pan_sensitivity,
            scroll_sensitivity,
        }
    }

    /// `pan` and `scroll` are the cumulative drag since the gesture began, as
    /// fractions of the view size.
    pub fn changed(&self, pan: f64, scroll: f64) -> Option<CenteredPov> {
        let center = self.initial.center();
        let up = self.initial.up();

        let tilt = rotation_about(self.initial.right(), scroll * self.scroll_sensitivity)?;
        let spin = rotation_about(up, -pan * self.pan_sensitivity)?;
        let rotation = spin * tilt;

        let location = center + rotation * (self.initial.location() - center);
        CenteredPov::new(location, center, rotation * up).ok()
    }
}
