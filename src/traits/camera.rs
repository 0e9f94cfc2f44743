/// What a render loop needs from a camera: a per-frame tick and GPU-ready
/// orientation data
pub trait CameraController {
    /// Advance to the frame timestamp (seconds, monotonic)
    fn update(&mut self, timestamp: f64);

    /// Column-major view matrix
    fn view_matrix(&self) -> [[f32; 4]; 4];

    /// Camera location in world space
    fn position(&self) -> [f32; 3];

    /// Unit line of sight
    fn forward(&self) -> [f32; 3];

    /// Unit up vector, orthogonal to `forward`
    fn up(&self) -> [f32; 3];
}
