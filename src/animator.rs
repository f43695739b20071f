//! Per-frame decorative transforms.
//!
//! [`advance`] is the only entry point. It depends on nothing but its inputs,
//! so the frame loop, snapshot mode and the tests all call it the same way.

use crate::scroll::ScrollProgress;
use crate::theme::ThemeState;

/// Tunables for the background motion
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatorConfig {
    /// Obelisk spin around Y, radians per second
    pub spin_speed: f64,
    /// Pages the background travels across while scrolling top to bottom
    pub pages: f64,
    /// World units per page
    pub page_distance: f64,
    pub float_speed: f64,
    pub float_rotation_intensity: f64,
    pub float_intensity: f64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        AnimatorConfig {
            spin_speed: 0.2,
            pages: 3.0,
            page_distance: 1.0,
            float_speed: 2.0,
            float_rotation_intensity: 0.5,
            float_intensity: 0.5,
        }
    }
}

impl AnimatorConfig {
    /// Group offset reached at the bottom of the page
    pub fn max_group_offset(&self) -> f64 {
        self.pages * self.page_distance
    }
}

/// Transforms for one frame
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SceneTransforms {
    /// Obelisk's own rotation (x wobble, y spin, z) in radians
    pub obelisk_rotation: [f64; 3],
    /// Tilt of the floating group that carries the obelisk and its shell
    pub float_rotation: [f64; 3],
    /// Vertical bob of the floating obelisk
    pub float_y: f64,
    /// Scale of the wireframe shell around the obelisk
    pub shell_scale: f64,
    /// Vertical travel of the whole background group
    pub group_offset_y: f64,
    pub stars_rotation_y: f64,
}

const WOBBLE_FREQUENCY: f64 = 0.5;
const WOBBLE_AMPLITUDE: f64 = 0.1;
const SHELL_BASE_SCALE: f64 = 1.05;
const SHELL_PULSE: f64 = 0.02;
const SHELL_PULSE_FREQUENCY: f64 = 1.5;
const STAR_DRIFT: f64 = 0.01;

/// Computes the transforms for `elapsed` seconds at the given scroll position.
///
/// The theme is part of the frame inputs but leaves geometry untouched:
/// toggling it only swaps the palette.
pub fn advance(
    config: &AnimatorConfig,
    elapsed: f64,
    scroll: ScrollProgress,
    _theme: ThemeState,
) -> SceneTransforms {
    let t = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };

    let f = t / 4.0 * config.float_speed;
    let (float_sin, float_cos) = f.sin_cos();
    let ri = config.float_rotation_intensity;

    SceneTransforms {
        obelisk_rotation: [
            (t * WOBBLE_FREQUENCY).sin() * WOBBLE_AMPLITUDE,
            t * config.spin_speed,
            0.0,
        ],
        float_rotation: [float_cos / 8.0 * ri, float_sin / 8.0 * ri, float_sin / 20.0 * ri],
        float_y: float_sin / 10.0 * config.float_intensity,
        shell_scale: SHELL_BASE_SCALE + SHELL_PULSE * (t * SHELL_PULSE_FREQUENCY).sin(),
        group_offset_y: scroll.value() * config.max_group_offset(),
        stars_rotation_y: t * STAR_DRIFT,
    }
}
