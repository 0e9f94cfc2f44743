pub mod camera;
pub mod observer;

pub use camera::*;
pub use observer::*;
