use glam::{DMat4, DVec3};

/// Right-handed view matrix for a camera at `eye` looking toward `center`.
pub fn look_at(eye: DVec3, center: DVec3, up: DVec3) -> DMat4 {
    DMat4::look_at_rh(eye, center, up)
}

/// Right-handed view matrix from an explicit forward direction.
pub fn look_to(eye: DVec3, forward: DVec3, up: DVec3) -> DMat4 {
    DMat4::look_to_rh(eye, forward, up)
}

/// Right-handed perspective projection with a `[0, 1]` depth range.
pub fn perspective(fov_y_radians: f64, aspect: f64, near: f64, far: f64) -> DMat4 {
    DMat4::perspective_rh(fov_y_radians, aspect, near, far)
}
