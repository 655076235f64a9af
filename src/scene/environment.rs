use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::Color;
use crate::types::{Material, SceneNode, Shape, SparkleEmitter, Transform};

pub const BACKGROUND: Color = Color::hex(0x050505);
pub const GROUND_Y: f32 = -2.5;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub position: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
}

/// Constraints for the user-driven orbit camera
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitSettings {
    pub enable_pan: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar_angle: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    Ambient {
        intensity: f32,
    },
    Spot {
        position: Vec3,
        angle: f32,
        penumbra: f32,
        intensity: f32,
        cast_shadow: bool,
        shadow_bias: f32,
    },
    Point {
        position: Vec3,
        intensity: f32,
        color: Color,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarField {
    pub radius: f32,
    pub depth: f32,
    pub count: u32,
    pub factor: f32,
    pub saturation: f32,
    pub fade: bool,
    pub speed: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomSettings {
    pub luminance_threshold: f32,
    pub intensity: f32,
    pub radius: f32,
    pub mipmap_blur: bool,
}

/// Everything around the tree that never reacts to state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub background: Color,
    pub fog: Fog,
    pub camera: CameraSettings,
    pub orbit: OrbitSettings,
    pub lights: Vec<Light>,
    pub stars: StarField,
    pub sparkles: SparkleEmitter,
    pub bloom: BloomSettings,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            fog: Fog {
                color: BACKGROUND,
                near: 5.0,
                far: 30.0,
            },
            camera: CameraSettings {
                position: Vec3::new(0.0, 2.0, 9.0),
                fov: 45.0,
            },
            orbit: OrbitSettings {
                enable_pan: false,
                min_distance: 4.0,
                max_distance: 15.0,
                // Stay just above the ground plane
                max_polar_angle: PI / 2.0 - 0.05,
                auto_rotate: true,
                auto_rotate_speed: 0.5,
            },
            lights: vec![
                Light::Ambient { intensity: 0.6 },
                Light::Spot {
                    position: Vec3::new(10.0, 15.0, 10.0),
                    angle: 0.25,
                    penumbra: 1.0,
                    intensity: 1.5,
                    cast_shadow: true,
                    shadow_bias: -0.0001,
                },
                Light::Point {
                    position: Vec3::new(-5.0, 5.0, -5.0),
                    intensity: 0.5,
                    color: Color::hex(0x60a5fa),
                },
                Light::Point {
                    position: Vec3::new(5.0, 3.0, 5.0),
                    intensity: 0.3,
                    color: Color::hex(0xfbbf24),
                },
            ],
            stars: StarField {
                radius: 100.0,
                depth: 50.0,
                count: 3000,
                factor: 4.0,
                saturation: 0.0,
                fade: true,
                speed: 1.0,
            },
            sparkles: SparkleEmitter {
                count: 200,
                scale: 15.0,
                size: 2.0,
                speed: 0.5,
                opacity: 0.6,
                color: Color::WHITE,
            },
            bloom: BloomSettings {
                luminance_threshold: 0.9,
                intensity: 1.0,
                radius: 0.5,
                mipmap_blur: true,
            },
        }
    }
}

/// Transparent plane that only receives the tree's shadow
pub fn ground_node() -> SceneNode {
    SceneNode::mesh(
        "ground",
        Transform::at(Vec3::new(0.0, GROUND_Y, 0.0)).with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
        Shape::Plane {
            width: 100.0,
            height: 100.0,
        },
        Material::Shadow { opacity: 0.5 },
    )
    .shadows(false, true)
}
