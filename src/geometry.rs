//! Meshes and point sets that make up the background.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Quad faces of a box, as indices into [`BoxGeometry::vertices`]
pub const BOX_FACES: [(usize, usize, usize, usize); 6] = [
    (0, 1, 2, 3),
    (5, 4, 7, 6),
    (4, 0, 3, 7),
    (1, 5, 6, 2),
    (4, 5, 1, 0),
    (3, 2, 6, 7),
];

/// Box edges (pairs of vertex indices)
pub const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0), // Back face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4), // Front face
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7), // Connecting edges
];

/// Axis-aligned box centred on the origin
#[derive(Clone, Debug, PartialEq)]
pub struct BoxGeometry {
    pub vertices: [[f64; 3]; 8],
}

impl BoxGeometry {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);
        BoxGeometry {
            vertices: [
                [-x, -y, -z], // 0
                [x, -y, -z],  // 1
                [x, y, -z],   // 2
                [-x, y, -z],  // 3
                [-x, -y, z],  // 4
                [x, -y, z],   // 5
                [x, y, z],    // 6
                [-x, y, z],   // 7
            ],
        }
    }

    /// The obelisk: a tall slab
    pub fn obelisk() -> Self {
        BoxGeometry::new(1.8, 6.5, 1.8)
    }
}

/// One straight grid line in the grid's local XZ plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub start: [f64; 3],
    pub end: [f64; 3],
    /// Section lines are drawn in the section colour
    pub section: bool,
}

/// Builds the lines of a square grid spanning `half_cells` cells each way
pub fn grid_lines(half_cells: i32, cell_size: f64, section_every: i32) -> Vec<GridLine> {
    let extent = half_cells as f64 * cell_size;
    let mut lines = Vec::with_capacity(((half_cells * 2 + 1) * 2) as usize);
    for i in -half_cells..=half_cells {
        let offset = i as f64 * cell_size;
        let section = section_every > 0 && i % section_every == 0;
        lines.push(GridLine {
            start: [offset, 0.0, -extent],
            end: [offset, 0.0, extent],
            section,
        });
        lines.push(GridLine {
            start: [-extent, 0.0, offset],
            end: [extent, 0.0, offset],
            section,
        });
    }
    lines
}

/// Star field shape
#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Inner radius of the shell
    pub radius: f64,
    /// Thickness of the shell
    pub depth: f64,
    pub seed: u64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        StarfieldConfig {
            count: 800,
            radius: 100.0,
            depth: 50.0,
            seed: 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: [f64; 3],
    /// Base brightness in [0.3, 1]
    pub brightness: f64,
}

/// Scatters stars uniformly over a spherical shell
pub fn starfield(config: &StarfieldConfig) -> Vec<Star> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|_| {
            // Uniform direction from a uniform z and azimuth
            let z: f64 = rng.gen::<f64>() * 2.0 - 1.0;
            let azimuth = rng.gen::<f64>() * std::f64::consts::TAU;
            let ring = (1.0 - z * z).sqrt();
            let r = config.radius + rng.gen::<f64>() * config.depth;
            Star {
                position: [ring * azimuth.cos() * r, ring * azimuth.sin() * r, z * r],
                brightness: 0.3 + rng.gen::<f64>() * 0.7,
            }
        })
        .collect()
}
