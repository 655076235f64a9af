use std::f32::consts::TAU;

use glam::Vec3;

use super::garland;
use super::palette::{ScenePalette, RED};
use crate::math::Color;
use crate::types::{Material, SceneNode, Shape, SparkleEmitter, Transform};

pub const TREE_NAME: &str = "tree";
pub const TREE_ORIGIN: Vec3 = Vec3::new(0.0, -2.5, 0.0);

pub const LAYER_COUNT: usize = 10;
pub const LAYER_BASE_Y: f32 = 0.5;
pub const LAYER_SPACING: f32 = 0.55;
pub const LAYER_HEIGHT: f32 = 1.1;

pub const ORNAMENT_BASE_COUNT: usize = 8;
pub const FAIRY_LIGHT_COUNT: usize = 100;
pub const FAIRY_LIGHT_TURNS: f32 = 7.0;

const TRUNK_COLOR: Color = Color::hex(0x3e2723);
const FOLIAGE_COLOR: Color = Color::hex(0x1a8c46);
const FOLIAGE_INNER_COLOR: Color = Color::hex(0x0f5132);

/// One conical foliage tier, in tree-local units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoliageLayer {
    pub y: f32,
    /// Cone base radius
    pub scale: f32,
    pub segments: u32,
}

/// Ornament style, chosen by `(layer + index) mod 3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrnamentKind {
    Bauble,
    Faceted,
    /// Small sphere, always red regardless of theme
    Accent,
}

impl OrnamentKind {
    pub fn for_slot(layer: usize, index: usize) -> Self {
        match (layer + index) % 3 {
            0 => OrnamentKind::Bauble,
            1 => OrnamentKind::Faceted,
            _ => OrnamentKind::Accent,
        }
    }

    pub fn is_red(self) -> bool {
        self == OrnamentKind::Accent
    }

    pub fn shape(self) -> Shape {
        match self {
            OrnamentKind::Bauble => sphere(0.1, 16),
            OrnamentKind::Faceted => Shape::Dodecahedron { radius: 0.09 },
            OrnamentKind::Accent => sphere(0.08, 16),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ornament {
    pub index: usize,
    pub kind: OrnamentKind,
    /// Offset from the ring center
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrnamentRing {
    pub layer: usize,
    /// Height of the ring center in tree-local units
    pub y: f32,
    pub ornaments: Vec<Ornament>,
}

impl OrnamentRing {
    pub fn red_count(&self) -> usize {
        self.ornaments.iter().filter(|o| o.kind.is_red()).count()
    }
}

/// State-independent tree geometry, computed once and reused for every build
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    pub layers: Vec<FoliageLayer>,
    pub rings: Vec<OrnamentRing>,
    pub fairy_lights: Vec<Vec3>,
    pub garland: Vec<Vec3>,
}

impl TreeLayout {
    pub fn new() -> Self {
        let layers = foliage_layers(LAYER_COUNT);
        // The top tier is too narrow to hang anything on
        let rings = layers[..layers.len().saturating_sub(1)]
            .iter()
            .enumerate()
            .map(|(i, layer)| ornament_ring(i, layer))
            .collect();

        Self {
            layers,
            rings,
            fairy_lights: fairy_light_positions(FAIRY_LIGHT_COUNT),
            garland: garland::garland_path(),
        }
    }

    pub fn ornament_count(&self) -> usize {
        self.rings.iter().map(|r| r.ornaments.len()).sum()
    }
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Tiers rise linearly while radius and segment count shrink toward the top
pub fn foliage_layers(count: usize) -> Vec<FoliageLayer> {
    let last = count.saturating_sub(1).max(1) as f32;
    (0..count)
        .map(|i| {
            let t = i as f32 / last;
            FoliageLayer {
                y: LAYER_BASE_Y + i as f32 * LAYER_SPACING,
                scale: 1.8 * (1.0 - t) + 0.2,
                segments: 12 + ((1.0 - t) * 6.0).floor() as u32,
            }
        })
        .collect()
}

/// Ring of `8 + layer` ornaments hugging the cone, rotated half a radian per tier
pub fn ornament_ring(layer_index: usize, layer: &FoliageLayer) -> OrnamentRing {
    let count = ORNAMENT_BASE_COUNT + layer_index;
    let radius = layer.scale * 0.9;

    let ornaments = (0..count)
        .map(|j| {
            let angle = (j as f32 / count as f32) * TAU + layer_index as f32 * 0.5;
            Ornament {
                index: j,
                kind: OrnamentKind::for_slot(layer_index, j),
                position: Vec3::new(angle.cos() * radius, -0.15, angle.sin() * radius),
            }
        })
        .collect();

    OrnamentRing {
        layer: layer_index,
        y: layer.y + 0.6,
        ornaments,
    }
}

/// Helix narrowing toward the top: radius and height linear in `t`
pub fn fairy_light_positions(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let y = t * 5.0 + 0.5;
            let radius = (1.0 - t) * 1.7 + 0.15;
            let angle = t * FAIRY_LIGHT_TURNS * TAU;
            Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
        })
        .collect()
}

fn sphere(radius: f32, segments: u32) -> Shape {
    Shape::Sphere {
        radius,
        width_segments: segments,
        height_segments: segments,
    }
}

fn trunk() -> SceneNode {
    SceneNode::mesh(
        "trunk",
        Transform::at(Vec3::new(0.0, 1.0, 0.0)),
        Shape::Cylinder {
            radius_top: 0.35,
            radius_bottom: 0.6,
            height: 2.5,
            radial_segments: 10,
        },
        Material::standard(TRUNK_COLOR, 0.0, 0.9),
    )
    .shadows(true, true)
}

fn foliage(layout: &TreeLayout) -> SceneNode {
    let tiers = layout
        .layers
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let cone = Shape::Cone {
                radius: layer.scale,
                height: LAYER_HEIGHT,
                radial_segments: layer.segments,
            };
            let outer = SceneNode::mesh(
                format!("foliage_{i}_outer"),
                Transform::IDENTITY,
                cone.clone(),
                Material::standard(FOLIAGE_COLOR, 0.1, 0.6),
            )
            .shadows(true, true);
            // Darker shell just inside the outer cone gives the tier some depth
            let inner = SceneNode::mesh(
                format!("foliage_{i}_inner"),
                Transform::at(Vec3::new(0.0, -0.05, 0.0)).with_scale(Vec3::new(0.92, 0.95, 0.92)),
                cone,
                Material::standard(FOLIAGE_INNER_COLOR, 0.0, 0.9),
            );

            SceneNode::group(
                format!("foliage_{i}"),
                Transform::at(Vec3::new(0.0, layer.y + 0.8, 0.0)),
                vec![outer, inner],
            )
        })
        .collect();

    SceneNode::group("foliage", Transform::IDENTITY, tiers)
}

fn ornaments(layout: &TreeLayout, palette: &ScenePalette) -> SceneNode {
    let rings = layout
        .rings
        .iter()
        .map(|ring| {
            let meshes = ring
                .ornaments
                .iter()
                .map(|ornament| {
                    let color = if ornament.kind.is_red() { RED } else { palette.ornament };
                    SceneNode::mesh(
                        format!("ornament_{}_{}", ring.layer, ornament.index),
                        Transform::at(ornament.position),
                        ornament.kind.shape(),
                        Material::standard(color, 0.8, 0.1),
                    )
                    .shadows(true, false)
                })
                .collect();

            SceneNode::group(
                format!("ornament_ring_{}", ring.layer),
                Transform::at(Vec3::new(0.0, ring.y, 0.0)),
                meshes,
            )
        })
        .collect();

    SceneNode::group("ornaments", Transform::IDENTITY, rings)
}

fn fairy_lights(layout: &TreeLayout, palette: &ScenePalette) -> SceneNode {
    let lights = layout
        .fairy_lights
        .iter()
        .enumerate()
        .map(|(i, &position)| {
            SceneNode::mesh(
                format!("fairy_light_{i}"),
                Transform::at(position),
                sphere(0.04, 8),
                Material::glowing(palette.lights, 3.0),
            )
        })
        .collect();

    SceneNode::group("fairy_lights", Transform::IDENTITY, lights)
}

fn snow() -> SceneNode {
    SceneNode::sparkles(
        "tree_snow",
        Vec3::new(0.0, 3.0, 0.0),
        SparkleEmitter {
            count: 80,
            scale: 4.0,
            size: 3.0,
            speed: 0.4,
            opacity: 0.5,
            color: Color::WHITE,
        },
    )
}

/// Full tree group at rest (no sway applied)
pub fn build_tree(layout: &TreeLayout, palette: &ScenePalette) -> SceneNode {
    SceneNode::group(
        TREE_NAME,
        Transform::at(TREE_ORIGIN),
        vec![
            trunk(),
            foliage(layout),
            ornaments(layout, palette),
            fairy_lights(layout, palette),
            garland::garland_node(&layout.garland),
            snow(),
        ],
    )
}
