use crate::fov::FovController;
use crate::pov::CenteredPov;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PovUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub location: [f32; 3],
    pub _pad1: f32,
    pub forward: [f32; 3],
    pub _pad2: f32,
    pub right: [f32; 3],
    pub _pad3: f32,
    pub up: [f32; 3],
    pub time: f32, // Frame timestamp in seconds
}

impl PovUniform {
    pub fn new(pov: &CenteredPov, fov: &FovController, time: f32) -> Self {
        Self {
            view: pov.view_matrix().as_mat4().to_cols_array_2d(),
            projection: fov.projection_matrix_f32().to_cols_array_2d(),
            location: pov.location().as_vec3().to_array(),
            _pad1: 0.0,
            forward: pov.forward().as_vec3().to_array(),
            _pad2: 0.0,
            right: pov.right().as_vec3().to_array(),
            _pad3: 0.0,
            up: pov.up().as_vec3().to_array(),
            time,
        }
    }
}
