mod basis;
mod matrix;
mod spherical;

pub use basis::{
    is_orthogonal, is_unit, orthonormalize, rotate_about_point, rotation_about, try_normalize,
    EPSILON,
};
pub use matrix::{look_at, look_to, perspective};
pub use spherical::Spherical;
