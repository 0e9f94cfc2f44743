use glam::{DQuat, DVec3};

/// Tolerance for unit-length and orthogonality checks on pose bases.
pub const EPSILON: f64 = 1e-6;

/// Squared lengths below this are treated as zero vectors.
const DEGENERATE_LENGTH_SQUARED: f64 = 1e-24;

pub fn is_unit(v: DVec3) -> bool {
    (v.length() - 1.0).abs() <= EPSILON
}

pub fn is_orthogonal(a: DVec3, b: DVec3) -> bool {
    a.dot(b).abs() <= EPSILON
}

/// Normalizes `v`, returning `None` for zero or non-finite vectors.
pub fn try_normalize(v: DVec3) -> Option<DVec3> {
    if !v.is_finite() || v.length_squared() < DEGENERATE_LENGTH_SQUARED {
        return None;
    }
    Some(v.normalize())
}

/// Removes the component of `v` along the unit vector `reference` and normalizes
/// what is left (one Gram-Schmidt step).
///
/// Returns `None` when `v` is parallel to `reference` or zero.
pub fn orthonormalize(v: DVec3, reference: DVec3) -> Option<DVec3> {
    try_normalize(v - reference * v.dot(reference))
}

/// Rotation by `angle` radians about `axis` (right-hand rule).
///
/// Returns `None` if the axis is degenerate.
pub fn rotation_about(axis: DVec3, angle: f64) -> Option<DQuat> {
    let axis = try_normalize(axis)?;
    Some(DQuat::from_axis_angle(axis, angle))
}

/// Rotates `point` about the line through `pivot` along `axis`.
pub fn rotate_about_point(point: DVec3, pivot: DVec3, axis: DVec3, angle: f64) -> Option<DVec3> {
    let rotation = rotation_about(axis, angle)?;
    Some(pivot + rotation * (point - pivot))
}
