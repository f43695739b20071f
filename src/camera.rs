//! Perspective camera looking down -Z.

/// Pinhole camera placed on the +Z axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: [f64; 3],
    /// Vertical field of view in degrees
    pub fov_y: f64,
    pub near: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            position: [0.0, 0.0, 12.0],
            fov_y: 45.0,
            near: 0.1,
        }
    }
}

impl Camera {
    /// Projects a world point onto a `width` x `height` pixel grid.
    ///
    /// Returns the pixel position and the view depth, or `None` when the
    /// point sits behind the near plane.
    pub fn project(&self, point: [f64; 3], width: usize, height: usize) -> Option<([f64; 2], f64)> {
        let depth = self.position[2] - point[2];
        if depth < self.near {
            return None;
        }
        let focal = (height as f64 / 2.0) / (self.fov_y.to_radians() / 2.0).tan();
        let x = (point[0] - self.position[0]) / depth * focal + width as f64 / 2.0;
        // Screen Y grows downwards
        let y = -(point[1] - self.position[1]) / depth * focal + height as f64 / 2.0;
        Some(([x, y], depth))
    }

    /// Euclidean distance from the camera, used for fog and fades
    pub fn distance(&self, point: [f64; 3]) -> f64 {
        let d = [
            point[0] - self.position[0],
            point[1] - self.position[1],
            point[2] - self.position[2],
        ];
        crate::math::length(d)
    }
}
