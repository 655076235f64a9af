use std::f32::consts::TAU;

use glam::Vec3;

use super::palette::SILVER;
use crate::math::CatmullRomCurve;
use crate::types::{Material, SceneNode, Shape, Transform};

pub const GARLAND_CONTROL_SEGMENTS: usize = 120;
pub const GARLAND_TUBULAR_SEGMENTS: usize = 120;
pub const GARLAND_TURNS: f32 = 6.0;
pub const GARLAND_HEIGHT: f32 = 4.5;
pub const GARLAND_BASE_RADIUS: f32 = 1.6;
pub const GARLAND_TUBE_RADIUS: f32 = 0.06;
pub const GARLAND_OFFSET: Vec3 = Vec3::new(0.0, 0.5, 0.0);

/// Control points of the helix the garland winds along
pub fn garland_control_points() -> Vec<Vec3> {
    (0..=GARLAND_CONTROL_SEGMENTS)
        .map(|i| {
            let t = i as f32 / GARLAND_CONTROL_SEGMENTS as f32;
            let angle = t * TAU * GARLAND_TURNS;
            let y = t * GARLAND_HEIGHT - 1.8;
            let r = GARLAND_BASE_RADIUS * (1.0 - t) + 0.2;
            Vec3::new(angle.cos() * r, y, angle.sin() * r)
        })
        .collect()
}

/// Smoothed tube centerline, `GARLAND_TUBULAR_SEGMENTS + 1` points
pub fn garland_path() -> Vec<Vec3> {
    match CatmullRomCurve::new(garland_control_points()) {
        Some(curve) => curve.sample(GARLAND_TUBULAR_SEGMENTS),
        None => Vec::new(),
    }
}

pub fn garland_node(path: &[Vec3]) -> SceneNode {
    SceneNode::mesh(
        "garland",
        Transform::at(GARLAND_OFFSET),
        Shape::Tube {
            path: path.to_vec(),
            radius: GARLAND_TUBE_RADIUS,
            radial_segments: 8,
            closed: false,
        },
        Material::standard(SILVER, 0.9, 0.1),
    )
    .shadows(true, false)
}
