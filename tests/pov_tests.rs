use glam::DVec3;
use pov_control::math::{is_orthogonal, is_unit, look_at, Spherical, EPSILON};
use pov_control::{CenteredPov, FreeForwardPov, Pov, PovError};

/// Deterministic spread of points on and around the unit sphere
fn sample_vectors() -> Vec<DVec3> {
    let mut out = Vec::new();
    for i in 0..12 {
        for j in 1..6 {
            let theta = j as f64 * std::f64::consts::PI / 6.0;
            let phi = i as f64 * std::f64::consts::TAU / 12.0;
            let r = 0.5 + (i * j % 7) as f64;
            out.push(Spherical::new(r, theta, phi).to_cartesian());
        }
    }
    out
}

#[cfg(test)]
mod centered_pov_tests {
    use super::*;

    #[test]
    fn test_basis_is_orthonormal_for_valid_inputs() {
        let samples = sample_vectors();
        let center = DVec3::new(0.25, -1.0, 2.0);
        for location in &samples {
            for hint in samples.iter().step_by(7) {
                let location = center + *location;
                let forward = (center - location).normalize();
                if forward.cross(hint.normalize()).length() < 1e-3 {
                    continue;
                }
                let pov = CenteredPov::new(location, center, *hint).unwrap();
                assert!(is_unit(pov.forward()), "forward not unit for {location:?}");
                assert!(is_unit(pov.up()), "up not unit for {location:?} / {hint:?}");
                assert!(
                    is_orthogonal(pov.forward(), pov.up()),
                    "basis not orthogonal for {location:?} / {hint:?}"
                );
            }
        }
    }

    #[test]
    fn test_up_hint_on_same_side() {
        let hint = DVec3::new(0.3, 1.0, 0.7);
        let pov = CenteredPov::new(DVec3::new(0.0, 0.0, -1.0), DVec3::ZERO, hint).unwrap();
        assert!(pov.up().dot(hint) > 0.0);
    }

    #[test]
    fn test_view_matrix_matches_look_at() {
        let pov = CenteredPov::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(-1.0, 0.0, 0.5), DVec3::Y)
            .unwrap();
        let expected = look_at(pov.location(), pov.center(), pov.up());
        assert!(pov.view_matrix().abs_diff_eq(expected, 1e-12));
        assert!(Pov::from(pov).view_matrix().abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn test_pov_kind_json_round_trip() {
        let pov = Pov::from(
            CenteredPov::new(DVec3::new(0.0, 1.0, -4.0), DVec3::ZERO, DVec3::Y).unwrap(),
        );
        let json = serde_json::to_string(&pov).unwrap();
        let back: Pov = serde_json::from_str(&json).unwrap();
        match back {
            Pov::Centered(centered) => {
                assert!((centered.location() - DVec3::new(0.0, 1.0, -4.0)).length() < EPSILON)
            }
            Pov::FreeForward(_) => panic!("wrong variant"),
        }
    }
}

#[cfg(test)]
mod free_forward_pov_tests {
    use super::*;

    #[test]
    fn test_new_is_orthonormal_for_valid_inputs() {
        let samples = sample_vectors();
        for forward in &samples {
            for hint in samples.iter().step_by(5) {
                if forward.normalize().cross(hint.normalize()).length() < 1e-3 {
                    continue;
                }
                let pov = FreeForwardPov::new(DVec3::ZERO, *forward, *hint).unwrap();
                assert!(is_unit(pov.forward()));
                assert!(is_unit(pov.up()));
                assert!(is_orthogonal(pov.forward(), pov.up()));
            }
        }
    }

    #[test]
    fn test_invalid_basis_never_reaches_renderer() {
        let skewed_up = DVec3::new(0.0, 1.0, 0.01).normalize();
        let skewed = FreeForwardPov::from_basis(DVec3::ZERO, DVec3::Z, skewed_up);
        assert_eq!(skewed, Err(PovError::NotOrthogonal));

        let substituted = FreeForwardPov::from_basis_or_default(
            DVec3::ZERO,
            DVec3::Z,
            DVec3::new(0.0, 1.0, 0.01),
        );
        assert_eq!(substituted.location(), DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(substituted.forward(), DVec3::new(0.0, 0.0, 1.0));
        assert_eq!(substituted.up(), DVec3::new(0.0, 1.0, 0.0));
    }
}
