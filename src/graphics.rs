use crate::color::Rgb;
use crate::math::{apply_lighting, calculate_light_intensity, edge_function, Lighting};
use crate::vertex::Vertex;

/// Colour buffer with a matching depth buffer
#[derive(Clone, Debug)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
    depth: Vec<f64>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize, clear: Rgb) -> Self {
        Framebuffer {
            width,
            height,
            pixels: vec![clear; width * height],
            depth: vec![f64::INFINITY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resets colour and depth, reallocating when the size changed
    pub fn clear(&mut self, width: usize, height: usize, color: Rgb) {
        if width != self.width || height != self.height {
            *self = Framebuffer::new(width, height, color);
            return;
        }
        self.pixels.fill(color);
        self.depth.fill(f64::INFINITY);
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.pixels[y * self.width + x]
    }

    #[cfg(test)]
    pub fn depth_at(&self, x: usize, y: usize) -> f64 {
        self.depth[y * self.width + x]
    }

    /// Blends `color` over the pixel at `opacity`, ignoring depth
    pub fn blend(&mut self, x: usize, y: usize, color: Rgb, opacity: f64) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = y * self.width + x;
        self.pixels[offset] = self.pixels[offset].mix(color, opacity);
    }

    /// Blends only when `depth` is in front of what is stored; depth is not written
    fn blend_tested(&mut self, x: usize, y: usize, depth: f64, color: Rgb, opacity: f64) {
        let offset = y * self.width + x;
        if depth <= self.depth[offset] {
            self.pixels[offset] = self.pixels[offset].mix(color, opacity);
        }
    }

    /// Iterates rows of pixels
    #[cfg(test)]
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks(self.width.max(1))
    }
}

/// Draws a triangle with per-pixel lighting and a depth test
pub fn draw_triangle(
    v0: &Vertex,
    v1: &Vertex,
    v2: &Vertex,
    framebuffer: &mut Framebuffer,
    light_pos_world: &[f64; 3],
    lighting: &Lighting,
    base_color: Rgb,
) {
    let (width, height) = (framebuffer.width, framebuffer.height);
    if width == 0 || height == 0 {
        return;
    }

    // Compute bounding box of the triangle
    let min_x = v0.screen_position[0]
        .min(v1.screen_position[0])
        .min(v2.screen_position[0])
        .floor()
        .max(0.0);
    let max_x = v0.screen_position[0]
        .max(v1.screen_position[0])
        .max(v2.screen_position[0])
        .ceil()
        .min(width as f64 - 1.0);
    let min_y = v0.screen_position[1]
        .min(v1.screen_position[1])
        .min(v2.screen_position[1])
        .floor()
        .max(0.0);
    let max_y = v0.screen_position[1]
        .max(v1.screen_position[1])
        .max(v2.screen_position[1])
        .ceil()
        .min(height as f64 - 1.0);
    if min_x > max_x || min_y > max_y {
        return;
    }

    // Precompute area of the triangle; its sign carries the winding
    let area = edge_function(&v0.screen_position, &v1.screen_position, &v2.screen_position);
    if area == 0.0 {
        return;
    }

    for y in min_y as usize..=max_y as usize {
        for x in min_x as usize..=max_x as usize {
            let p = [x as f64 + 0.5, y as f64 + 0.5];

            // Normalised barycentric coordinates, all non-negative inside
            let w0 = edge_function(&v1.screen_position, &v2.screen_position, &p) / area;
            let w1 = edge_function(&v2.screen_position, &v0.screen_position, &p) / area;
            let w2 = edge_function(&v0.screen_position, &v1.screen_position, &p) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            // Depth test
            let depth = v0.depth * w0 + v1.depth * w1 + v2.depth * w2;
            let offset = y * width + x;
            if depth >= framebuffer.depth[offset] {
                continue;
            }
            framebuffer.depth[offset] = depth;

            let position = [
                v0.position[0] * w0 + v1.position[0] * w1 + v2.position[0] * w2,
                v0.position[1] * w0 + v1.position[1] * w1 + v2.position[1] * w2,
                v0.position[2] * w0 + v1.position[2] * w1 + v2.position[2] * w2,
            ];

            // Interpolate normal
            let nx = v0.normal[0] * w0 + v1.normal[0] * w1 + v2.normal[0] * w2;
            let ny = v0.normal[1] * w0 + v1.normal[1] * w1 + v2.normal[1] * w2;
            let nz = v0.normal[2] * w0 + v1.normal[2] * w1 + v2.normal[2] * w2;
            let length = (nx * nx + ny * ny + nz * nz).sqrt();
            let interpolated_normal = [nx / length, ny / length, nz / length];

            let diffuse = calculate_light_intensity(&interpolated_normal, &position, light_pos_world);
            framebuffer.pixels[offset] = apply_lighting(base_color, diffuse, lighting);
        }
    }
}

/// End point of a line: pixel position plus view depth
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Draws a depth-tested, blended line using Bresenham's algorithm
pub fn draw_line(
    from: LinePoint,
    to: LinePoint,
    framebuffer: &mut Framebuffer,
    color: Rgb,
    opacity: f64,
) {
    let (width, height) = (framebuffer.width as isize, framebuffer.height as isize);
    let (mut x0, mut y0, x1, y1) = (
        from.x.round() as isize,
        from.y.round() as isize,
        to.x.round() as isize,
        to.y.round() as isize,
    );
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy; // error value e_xy
    let steps = dx.max(-dy).max(1) as f64;
    let mut step = 0.0;

    loop {
        if x0 >= 0 && x0 < width && y0 >= 0 && y0 < height {
            let depth = from.depth + (to.depth - from.depth) * (step / steps);
            framebuffer.blend_tested(x0 as usize, y0 as usize, depth, color, opacity);
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
        step += 1.0;
    }
}
