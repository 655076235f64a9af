//! Time-driven motion. Every function here is a pure function of elapsed
//! seconds; nothing accumulates between frames.

use glam::Vec3;

use crate::types::{FloatParams, Transform};

pub const SWAY_FREQUENCY: f32 = 0.1;
pub const SWAY_AMPLITUDE: f32 = 0.03;

/// Yaw of the whole tree, a slow sway of a couple of degrees
pub fn tree_yaw(elapsed: f32) -> f32 {
    (elapsed * SWAY_FREQUENCY).sin() * SWAY_AMPLITUDE
}

pub fn tree_transform(origin: Vec3, elapsed: f32) -> Transform {
    Transform::at(origin).with_rotation(Vec3::new(0.0, tree_yaw(elapsed), 0.0))
}

fn map_linear(x: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    b1 + (x - a1) * (b2 - b1) / (a2 - a1)
}

/// Bobbing offset and wobble for a floating prop
pub fn float_transform(params: &FloatParams, elapsed: f32) -> Transform {
    let phase = (params.offset + elapsed) / 4.0 * params.speed;

    let rotation = Vec3::new(phase.cos() / 8.0, phase.sin() / 8.0, phase.sin() / 20.0)
        * params.rotation_intensity;

    let [low, high] = params.floating_range;
    let bob = map_linear(phase.sin() / 10.0, -0.1, 0.1, low, high);

    Transform::at(Vec3::new(0.0, bob * params.float_intensity, 0.0)).with_rotation(rotation)
}
