use crate::pov::CenteredPov;

/// Pinch gesture: scales the camera's distance from its center by `1 / scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialMove {
    initial: CenteredPov,
    sensitivity: f64,
}

impl RadialMove {
    pub fn new(initial: CenteredPov, sensitivity: f64) -> Self {
        Self {
            initial,
            sensitivity,
        }
    }

    /// The displacement comes from the captured pose; center and up come from
    /// `current`.
    pub fn changed(&self, current: &CenteredPov, scale: f64) -> Option<CenteredPov> {
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }
        let displacement = self.initial.location() - self.initial.center();
        let factor = scale.powf(self.sensitivity).recip();
        let location = current.center() + displacement * factor;
        CenteredPov::new(location, current.center(), current.up()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_stretch_moves_closer() {
        let pov = CenteredPov::new(DVec3::new(0.0, 0.0, -4.0), DVec3::ZERO, DVec3::Y).unwrap();
        let pinch = RadialMove::new(pov, 1.0);
        let out = pinch.changed(&pov, 2.0).unwrap();
        assert!((out.location() - DVec3::new(0.0, 0.0, -2.0)).length() < 1e-12);
    }

    #[test]
    fn test_squeeze_moves_farther() {
        let pov = CenteredPov::new(DVec3::new(0.0, 0.0, -4.0), DVec3::ZERO, DVec3::Y).unwrap();
        let pinch = RadialMove::new(pov, 1.0);
        let out = pinch.changed(&pov, 0.5).unwrap();
        assert!((out.distance() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_is_cumulative_not_compounded() {
        let pov = CenteredPov::new(DVec3::new(0.0, 0.0, -4.0), DVec3::ZERO, DVec3::Y).unwrap();
        let pinch = RadialMove::new(pov, 1.0);
        let once = pinch.changed(&pov, 2.0).unwrap();
        let twice = pinch.changed(&once, 2.0).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_takes_up_from_current() {
        let pov = CenteredPov::default();
        let rolled = pov.with_up(DVec3::X).unwrap();
        let out = RadialMove::new(pov, 1.0).changed(&rolled, 1.0).unwrap();
        assert!((out.up() - DVec3::X).length() < 1e-12);
    }

    #[test]
    fn test_degenerate_scale() {
        let pov = CenteredPov::default();
        let pinch = RadialMove::new(pov, 1.0);
        assert!(pinch.changed(&pov, 0.0).is_none());
        assert!(pinch.changed(&pov, -1.0).is_none());
        assert!(pinch.changed(&pov, f64::INFINITY).is_none());
    }
}
