use crate::color::Rgb;

/// Edge function used in rasterization
pub fn edge_function(a: &[f64; 2], b: &[f64; 2], c: &[f64; 2]) -> f64 {
    (c[0] - a[0]) * (b[1] - a[1]) - (c[1] - a[1]) * (b[0] - a[0])
}

/// Multiplies a 3x3 matrix by a 3-dimensional vector
pub fn multiply_matrix_vector(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Multiplies two 3x3 matrices
pub fn multiply_matrices(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut result = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

pub fn rotation_x(angle: f64) -> [[f64; 3]; 3] {
    let (s, c) = angle.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]]
}

pub fn rotation_y(angle: f64) -> [[f64; 3]; 3] {
    let (s, c) = angle.sin_cos();
    [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]]
}

pub fn rotation_z(angle: f64) -> [[f64; 3]; 3] {
    let (s, c) = angle.sin_cos();
    [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]
}

/// Euler rotation applied in X, then Y, then Z order
pub fn rotation_xyz(angles: [f64; 3]) -> [[f64; 3]; 3] {
    let xy = multiply_matrices(&rotation_y(angles[1]), &rotation_x(angles[0]));
    multiply_matrices(&rotation_z(angles[2]), &xy)
}

pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn length(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Calculates the normal vector of a triangle
pub fn calculate_normal(a: &[f64; 3], b: &[f64; 3], c: &[f64; 3]) -> [f64; 3] {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let normal = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    let length = length(normal);
    [normal[0] / length, normal[1] / length, normal[2] / length]
}

/// Lambert term for a surface point lit from `light_pos`
pub fn calculate_light_intensity(
    normal: &[f64; 3],
    position: &[f64; 3],
    light_pos: &[f64; 3],
) -> f64 {
    let light_dir = [
        light_pos[0] - position[0],
        light_pos[1] - position[1],
        light_pos[2] - position[2],
    ];
    let length = length(light_dir);
    if length == 0.0 {
        return 0.0;
    }
    let light_dir = [
        light_dir[0] / length,
        light_dir[1] / length,
        light_dir[2] / length,
    ];
    let dot_product =
        normal[0] * light_dir[0] + normal[1] * light_dir[1] + normal[2] * light_dir[2];
    dot_product.max(0.0)
}

/// Inputs of the shading model: ambient + one coloured point light + emission
#[derive(Clone, Copy, Debug)]
pub struct Lighting {
    pub ambient: f64,
    pub light_color: Rgb,
    pub light_intensity: f64,
    pub emissive: Rgb,
    pub emissive_intensity: f64,
}

/// Applies lighting to a base colour given the Lambert term at the pixel
pub fn apply_lighting(color: Rgb, diffuse: f64, lighting: &Lighting) -> Rgb {
    let base = color.to_unit();
    let light = lighting.light_color.to_unit();
    let emissive = lighting.emissive.to_unit();
    // Scaled down so a white surface at ambient 1.5 does not saturate
    let ambient = lighting.ambient * 0.4;
    let direct = diffuse * lighting.light_intensity * 0.5;
    let mut out = [0.0; 3];
    for i in 0..3 {
        out[i] = base[i] * (ambient + direct * light[i])
            + emissive[i] * lighting.emissive_intensity
            // Dark metal still picks up a tint of the light
            + light[i] * direct * 0.15;
    }
    Rgb::from_unit(out)
}

/// Ease-out cubic on `[0, 1]`
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
