/// Vertex structure with world position, screen position, depth and normal
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f64; 3],
    pub screen_position: [f64; 2],
    /// Distance from the camera along its view axis
    pub depth: f64,
    pub normal: [f64; 3],
}
