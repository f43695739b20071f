//! Renders the decorative background into a [`Framebuffer`].
//!
//! Draw order: stars, the solid obelisk (writes depth), the grid and the
//! wireframe shell (depth-tested, blended, no depth writes).

use crate::animator::SceneTransforms;
use crate::camera::Camera;
use crate::color::Rgb;
use crate::geometry::{
    grid_lines, starfield, BoxGeometry, GridLine, Star, StarfieldConfig, BOX_EDGES, BOX_FACES,
};
use crate::graphics::{draw_line, draw_triangle, Framebuffer, LinePoint};
use crate::math::{
    add, calculate_normal, length, multiply_matrices, multiply_matrix_vector, rotation_x,
    rotation_xyz, rotation_y, Lighting,
};
use crate::theme::Palette;
use crate::vertex::Vertex;

const LIGHT_POSITION: [f64; 3] = [10.0, 10.0, 10.0];
const GRID_POSITION: [f64; 3] = [0.0, -4.0, 0.0];
const GRID_TILT: f64 = std::f64::consts::PI / 2.5;
const GRID_HALF_CELLS: i32 = 20;
const GRID_FADE_DISTANCE: f64 = 40.0;
const CELL_OPACITY: f64 = 0.35;
const SECTION_OPACITY: f64 = 0.6;
/// Segments further than this many screen widths off-screen are skipped
const OFFSCREEN_MARGIN: f64 = 2.0;

/// Per-frame drawing switches
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Draw the shaded obelisk; off leaves only the wireframe shell
    pub solid: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { solid: true }
    }
}

/// Static scene content; built once, drawn every frame
pub struct Scene {
    camera: Camera,
    obelisk: BoxGeometry,
    grid: Vec<GridLine>,
    stars: Vec<Star>,
}

impl Scene {
    pub fn new(stars: &StarfieldConfig) -> Self {
        Scene {
            camera: Camera::default(),
            obelisk: BoxGeometry::obelisk(),
            grid: grid_lines(GRID_HALF_CELLS, 1.0, 2),
            stars: starfield(stars),
        }
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    /// Clears `framebuffer` to the palette background and draws one frame
    pub fn render(
        &self,
        framebuffer: &mut Framebuffer,
        width: usize,
        height: usize,
        transforms: &SceneTransforms,
        palette: &Palette,
        options: RenderOptions,
    ) {
        framebuffer.clear(width, height, palette.background);
        if width == 0 || height == 0 {
            return;
        }

        if palette.show_stars {
            self.draw_stars(framebuffer, transforms);
        }

        let lift = [0.0, transforms.float_y + transforms.group_offset_y, 0.0];
        // Float group tilt applied on top of the obelisk's own spin
        let rotation = multiply_matrices(
            &rotation_xyz(transforms.float_rotation),
            &rotation_xyz(transforms.obelisk_rotation),
        );

        if options.solid {
            self.draw_obelisk(framebuffer, &rotation, lift, palette);
        }
        self.draw_grid(framebuffer, transforms, palette);
        self.draw_shell(framebuffer, &rotation, lift, transforms.shell_scale, palette);
    }

    fn draw_stars(&self, framebuffer: &mut Framebuffer, transforms: &SceneTransforms) {
        let (width, height) = (framebuffer.width(), framebuffer.height());
        let spin = rotation_y(transforms.stars_rotation_y);
        let far = self
            .stars
            .iter()
            .map(|s| length(s.position))
            .fold(1.0, f64::max);
        for star in &self.stars {
            let position = multiply_matrix_vector(&spin, &star.position);
            let Some((p, _)) = self.camera.project(position, width, height) else {
                continue;
            };
            if p[0] < 0.0 || p[1] < 0.0 {
                continue;
            }
            // Deeper stars fade towards the background
            let fade = 1.0 - 0.6 * (length(position) / far);
            let opacity = (star.brightness * fade).clamp(0.0, 1.0);
            framebuffer.blend(p[0] as usize, p[1] as usize, Rgb::WHITE, opacity);
        }
    }

    fn draw_obelisk(
        &self,
        framebuffer: &mut Framebuffer,
        rotation: &[[f64; 3]; 3],
        lift: [f64; 3],
        palette: &Palette,
    ) {
        let (width, height) = (framebuffer.width(), framebuffer.height());
        let world: Vec<[f64; 3]> = self
            .obelisk
            .vertices
            .iter()
            .map(|v| add(multiply_matrix_vector(rotation, v), lift))
            .collect();
        let centre = lift;

        let lighting = Lighting {
            ambient: palette.ambient_intensity,
            light_color: palette.light_color,
            light_intensity: palette.light_intensity,
            emissive: palette.emissive,
            emissive_intensity: palette.emissive_intensity,
        };

        for &(a, b, c, d) in BOX_FACES.iter() {
            let mut normal = calculate_normal(&world[a], &world[b], &world[c]);
            // Face normals point away from the box centre
            let face_mid = [
                (world[a][0] + world[c][0]) / 2.0 - centre[0],
                (world[a][1] + world[c][1]) / 2.0 - centre[1],
                (world[a][2] + world[c][2]) / 2.0 - centre[2],
            ];
            if normal[0] * face_mid[0] + normal[1] * face_mid[1] + normal[2] * face_mid[2] < 0.0 {
                normal = [-normal[0], -normal[1], -normal[2]];
            }

            let corners: Option<Vec<Vertex>> = [a, b, c, d]
                .iter()
                .map(|&i| {
                    self.camera
                        .project(world[i], width, height)
                        .map(|(screen_position, depth)| Vertex {
                            position: world[i],
                            screen_position,
                            depth,
                            normal,
                        })
                })
                .collect();
            let Some(corners) = corners else {
                continue;
            };

            // Triangle 1: a, b, c
            draw_triangle(
                &corners[0],
                &corners[1],
                &corners[2],
                framebuffer,
                &LIGHT_POSITION,
                &lighting,
                palette.obelisk_base,
            );
            // Triangle 2: a, c, d
            draw_triangle(
                &corners[0],
                &corners[2],
                &corners[3],
                framebuffer,
                &LIGHT_POSITION,
                &lighting,
                palette.obelisk_base,
            );
        }
    }

    fn draw_grid(&self, framebuffer: &mut Framebuffer, transforms: &SceneTransforms, palette: &Palette) {
        let tilt = rotation_x(GRID_TILT);
        let origin = add(GRID_POSITION, [0.0, transforms.group_offset_y, 0.0]);
        let to_world = |p: &[f64; 3]| add(multiply_matrix_vector(&tilt, p), origin);

        for line in &self.grid {
            let (color, strength) = if line.section {
                (palette.grid_section, SECTION_OPACITY)
            } else {
                (palette.grid_cell, CELL_OPACITY)
            };
            // One segment per cell so the fade follows the distance
            let segments = (GRID_HALF_CELLS * 2) as usize;
            for s in 0..segments {
                let t0 = s as f64 / segments as f64;
                let t1 = (s + 1) as f64 / segments as f64;
                let a = to_world(&lerp3(line.start, line.end, t0));
                let b = to_world(&lerp3(line.start, line.end, t1));
                let mid = lerp3(a, b, 0.5);
                let fade = 1.0 - (self.camera.distance(mid) / GRID_FADE_DISTANCE).min(1.0);
                if fade <= 0.0 {
                    continue;
                }
                self.draw_segment(framebuffer, a, b, color, strength * fade);
            }
        }
    }

    fn draw_shell(
        &self,
        framebuffer: &mut Framebuffer,
        rotation: &[[f64; 3]; 3],
        lift: [f64; 3],
        scale: f64,
        palette: &Palette,
    ) {
        let world: Vec<[f64; 3]> = self
            .obelisk
            .vertices
            .iter()
            .map(|v| {
                let scaled = [v[0] * scale, v[1] * scale, v[2] * scale];
                add(multiply_matrix_vector(rotation, &scaled), lift)
            })
            .collect();
        for &(start, end) in &BOX_EDGES {
            self.draw_segment(
                framebuffer,
                world[start],
                world[end],
                palette.wireframe,
                // Boosted so a one-pixel edge stays visible in a terminal cell
                (palette.wireframe_opacity * 4.0).min(1.0),
            );
        }
    }

    fn draw_segment(&self, framebuffer: &mut Framebuffer, a: [f64; 3], b: [f64; 3], color: Rgb, opacity: f64) {
        let (width, height) = (framebuffer.width(), framebuffer.height());
        let (Some((pa, da)), Some((pb, db))) = (
            self.camera.project(a, width, height),
            self.camera.project(b, width, height),
        ) else {
            return;
        };
        if !on_screen(pa, width, height) && !on_screen(pb, width, height) {
            let (w, h) = (width as f64, height as f64);
            let both_outside = (pa[0] < 0.0 && pb[0] < 0.0)
                || (pa[0] >= w && pb[0] >= w)
                || (pa[1] < 0.0 && pb[1] < 0.0)
                || (pa[1] >= h && pb[1] >= h);
            if both_outside {
                return;
            }
        }
        if !near_screen(pa, width, height) || !near_screen(pb, width, height) {
            return;
        }
        draw_line(
            LinePoint { x: pa[0], y: pa[1], depth: da },
            LinePoint { x: pb[0], y: pb[1], depth: db },
            framebuffer,
            color,
            opacity,
        );
    }
}

fn lerp3(a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn on_screen(p: [f64; 2], width: usize, height: usize) -> bool {
    p[0] >= 0.0 && p[1] >= 0.0 && p[0] < width as f64 && p[1] < height as f64
}

fn near_screen(p: [f64; 2], width: usize, height: usize) -> bool {
    let mx = width as f64 * OFFSCREEN_MARGIN;
    let my = height as f64 * OFFSCREEN_MARGIN;
    p[0].is_finite()
        && p[1].is_finite()
        && p[0] > -mx
        && p[0] < width as f64 + mx
        && p[1] > -my
        && p[1] < height as f64 + my
}
