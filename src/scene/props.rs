//! Floating gifts, candies and candy canes scattered around the tree.
//!
//! Props are rolled once when the scene builder is created and never change
//! afterwards; they ignore `TreeState` entirely.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use glam::Vec3;
use rand::Rng;

use crate::math::Color;
use crate::types::{FloatParams, Material, SceneNode, Shape, Transform};

pub const PROP_COUNT: usize = 20;

/// Weighted draw table: gifts and candies twice as common as canes
const KIND_TABLE: [PropKind; 5] = [
    PropKind::Gift,
    PropKind::Gift,
    PropKind::Candy,
    PropKind::Candy,
    PropKind::Cane,
];

pub const PROP_COLORS: [Color; 5] = [
    Color::hex(0xef4444),
    Color::hex(0x22c55e),
    Color::hex(0x3b82f6),
    Color::hex(0xeab308),
    Color::hex(0xa855f7),
];

const CANE_RED: Color = Color::hex(0xef4444);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropKind {
    Gift,
    Candy,
    Cane,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoamingProp {
    pub kind: PropKind,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub color: Color,
    pub ribbon_color: Color,
    /// Bobbing speed multiplier
    pub speed: f32,
    pub float_offset: f32,
}

impl RoamingProp {
    pub fn float_params(&self) -> FloatParams {
        FloatParams {
            speed: self.speed,
            rotation_intensity: 1.0,
            float_intensity: 2.0,
            floating_range: [-1.0, 1.0],
            offset: self.float_offset,
        }
    }
}

/// Roll `PROP_COUNT` props from the thread-local generator
pub fn generate() -> Vec<RoamingProp> {
    generate_with(&mut rand::rng())
}

pub fn generate_with<R: Rng>(rng: &mut R) -> Vec<RoamingProp> {
    (0..PROP_COUNT).map(|_| roll(rng)).collect()
}

fn roll<R: Rng>(rng: &mut R) -> RoamingProp {
    let position = Vec3::new(
        (rng.random::<f32>() - 0.5) * 22.0,
        rng.random::<f32>() * 10.0 - 2.0,
        (rng.random::<f32>() - 0.5) * 20.0 - 5.0,
    );
    let rotation = Vec3::new(rng.random::<f32>() * PI, rng.random::<f32>() * PI, 0.0);
    let scale = 0.6 + rng.random::<f32>() * 0.6;
    let kind = KIND_TABLE[rng.random_range(0..KIND_TABLE.len())];
    let color = PROP_COLORS[rng.random_range(0..PROP_COLORS.len())];
    let speed = 0.4 + rng.random::<f32>() * 0.6;

    RoamingProp {
        kind,
        position,
        rotation,
        scale,
        color,
        ribbon_color: Color::WHITE,
        speed,
        float_offset: rng.random::<f32>() * 10_000.0,
    }
}

fn torus(radius: f32, tube: f32, arc: f32) -> Shape {
    Shape::Torus {
        radius,
        tube,
        radial_segments: 8,
        tubular_segments: 16,
        arc,
    }
}

fn gift_parts(prop: &RoamingProp) -> Vec<SceneNode> {
    let s = prop.scale;
    let ribbon = Material::matte(prop.ribbon_color);
    let cube = Shape::Box { size: Vec3::splat(s) };

    let bow = SceneNode::group(
        "bow",
        Transform::at(Vec3::new(0.0, s / 2.0, 0.0)),
        vec![
            SceneNode::mesh(
                "bow_right",
                Transform::at(Vec3::new(0.1, 0.1, 0.0)).with_rotation(Vec3::new(0.0, 0.0, -FRAC_PI_4)),
                torus(0.1 * s, 0.04 * s, TAU),
                ribbon,
            ),
            SceneNode::mesh(
                "bow_left",
                Transform::at(Vec3::new(-0.1, 0.1, 0.0)).with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_4)),
                torus(0.1 * s, 0.04 * s, TAU),
                ribbon,
            ),
        ],
    );

    vec![
        SceneNode::mesh(
            "box",
            Transform::IDENTITY,
            Shape::RoundedBox {
                size: Vec3::splat(s),
                radius: 0.05,
                smoothness: 4,
            },
            Material::standard(prop.color, 0.1, 0.3),
        )
        .shadows(true, true),
        SceneNode::mesh(
            "ribbon_x",
            Transform::IDENTITY.with_scale(Vec3::new(1.02, 1.0, 0.2)),
            cube.clone(),
            ribbon,
        ),
        SceneNode::mesh(
            "ribbon_z",
            Transform::IDENTITY.with_scale(Vec3::new(0.2, 1.0, 1.02)),
            cube,
            ribbon,
        ),
        bow,
    ]
}

fn candy_parts(prop: &RoamingProp) -> Vec<SceneNode> {
    let s = prop.scale;
    let wrapper = Shape::Cone {
        radius: s * 0.3,
        height: s * 0.4,
        radial_segments: 16,
    };
    let paper = Material::standard(Color::WHITE, 0.0, 0.4);

    vec![
        SceneNode::mesh(
            "center",
            Transform::IDENTITY.with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2)),
            Shape::Cylinder {
                radius_top: s * 0.3,
                radius_bottom: s * 0.3,
                height: s * 0.8,
                radial_segments: 16,
            },
            Material::standard(prop.color, 0.3, 0.2),
        )
        .shadows(true, false),
        SceneNode::mesh(
            "wrapper_right",
            Transform::at(Vec3::new(s * 0.55, 0.0, 0.0)).with_rotation(Vec3::new(0.0, 0.0, -FRAC_PI_2)),
            wrapper.clone(),
            paper,
        ),
        SceneNode::mesh(
            "wrapper_left",
            Transform::at(Vec3::new(-s * 0.55, 0.0, 0.0)).with_rotation(Vec3::new(0.0, 0.0, FRAC_PI_2)),
            wrapper,
            paper,
        ),
    ]
}

fn cane_parts(prop: &RoamingProp) -> Vec<SceneNode> {
    let s = prop.scale;
    let candy = Material::standard(CANE_RED, 0.0, 0.2);
    let stripe = Material::matte(Color::WHITE);

    vec![
        SceneNode::mesh(
            "stick",
            Transform::IDENTITY,
            Shape::Cylinder {
                radius_top: s * 0.1,
                radius_bottom: s * 0.1,
                height: s * 1.2,
                radial_segments: 16,
            },
            candy,
        ),
        SceneNode::mesh(
            "hook",
            Transform::at(Vec3::new(s * 0.2, s * 0.6, 0.0)),
            torus(s * 0.2, s * 0.1, PI),
            candy,
        ),
        SceneNode::mesh(
            "stripe_top",
            Transform::at(Vec3::new(0.0, 0.2 * s, 0.0)),
            torus(s * 0.11, s * 0.02, TAU),
            stripe,
        ),
        SceneNode::mesh(
            "stripe_bottom",
            Transform::at(Vec3::new(0.0, -0.2 * s, 0.0)),
            torus(s * 0.11, s * 0.02, TAU),
            stripe,
        ),
    ]
}

/// Float wrapper around the prop's posed body
pub fn prop_node(index: usize, prop: &RoamingProp) -> SceneNode {
    let parts = match prop.kind {
        PropKind::Gift => gift_parts(prop),
        PropKind::Candy => candy_parts(prop),
        PropKind::Cane => cane_parts(prop),
    };
    let body = SceneNode::group(
        format!("prop_{index}_body"),
        Transform::at(prop.position).with_rotation(prop.rotation),
        parts,
    );
    SceneNode::floating(format!("prop_{index}"), prop.float_params(), body)
}

pub fn props_node(props: &[RoamingProp]) -> SceneNode {
    let children = props.iter().enumerate().map(|(i, p)| prop_node(i, p)).collect();
    SceneNode::group("roaming_props", Transform::IDENTITY, children)
}
