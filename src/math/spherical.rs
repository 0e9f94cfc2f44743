use glam::DVec3;

/// Spherical coordinates with +Y as the polar axis.
///
/// `theta` is the polar angle measured from +Y in `[0, pi]`, `phi` the azimuth
/// in the XZ plane measured from +Z toward +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub r: f64,
    pub theta: f64,
    pub phi: f64,
}

impl Spherical {
    pub const fn new(r: f64, theta: f64, phi: f64) -> Self {
        Self { r, theta, phi }
    }

    pub fn from_cartesian(v: DVec3) -> Self {
        let r = v.length();
        if r == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        let theta = (v.y / r).clamp(-1.0, 1.0).acos();
        let phi = v.x.atan2(v.z);
        Self::new(r, theta, phi)
    }

    pub fn to_cartesian(self) -> DVec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        DVec3::new(
            self.r * sin_theta * sin_phi,
            self.r * cos_theta,
            self.r * sin_theta * cos_phi,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes() {
        let s = Spherical::from_cartesian(DVec3::new(0.0, 2.0, 0.0));
        assert!((s.r - 2.0).abs() < 1e-12);
        assert!(s.theta.abs() < 1e-12);

        let s = Spherical::from_cartesian(DVec3::new(3.0, 0.0, 0.0));
        assert!((s.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((s.phi - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_converts_back() {
        let v = DVec3::new(-1.5, 0.25, 4.0);
        let back = Spherical::from_cartesian(v).to_cartesian();
        assert!((back - v).length() < 1e-9);
    }

    #[test]
    fn test_zero_vector() {
        let s = Spherical::from_cartesian(DVec3::ZERO);
        assert_eq!(s, Spherical::new(0.0, 0.0, 0.0));
        assert_eq!(s.to_cartesian(), DVec3::ZERO);
    }
}
