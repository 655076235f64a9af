use glam::Mat4;

use crate::scene::Scene;
use crate::types::{Material, NodeKind, SceneNode, Shape};

pub const FLAG_CAST_SHADOW: u32 = 1;
pub const FLAG_RECEIVE_SHADOW: u32 = 1 << 1;
pub const FLAG_TONE_MAPPED: u32 = 1 << 2;
pub const FLAG_SHADOW_ONLY: u32 = 1 << 3;

/// Per-mesh instance record for GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub metalness: f32,
    pub emissive: [f32; 3],
    pub roughness: f32,
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub shape: u32,
    pub flags: u32,
}

/// Stable numeric id of a shape kind, matching the order of `Shape`'s variants
pub fn shape_id(shape: &Shape) -> u32 {
    match shape {
        Shape::Cylinder { .. } => 0,
        Shape::Cone { .. } => 1,
        Shape::Sphere { .. } => 2,
        Shape::Dodecahedron { .. } => 3,
        Shape::Box { .. } => 4,
        Shape::RoundedBox { .. } => 5,
        Shape::Torus { .. } => 6,
        Shape::Tube { .. } => 7,
        Shape::Plane { .. } => 8,
    }
}

impl InstanceData {
    pub fn new(
        model: Mat4,
        shape: &Shape,
        material: &Material,
        cast_shadow: bool,
        receive_shadow: bool,
    ) -> Self {
        let mut flags = 0;
        if cast_shadow {
            flags |= FLAG_CAST_SHADOW;
        }
        if receive_shadow {
            flags |= FLAG_RECEIVE_SHADOW;
        }

        let mut instance = Self {
            model: model.to_cols_array_2d(),
            color: [0.0; 3],
            metalness: 0.0,
            emissive: [0.0; 3],
            roughness: 1.0,
            emissive_intensity: 0.0,
            opacity: 1.0,
            shape: shape_id(shape),
            flags,
        };

        match *material {
            Material::Standard {
                color,
                emissive,
                emissive_intensity,
                metalness,
                roughness,
                tone_mapped,
            } => {
                instance.color = color.to_array();
                instance.emissive = emissive.to_array();
                instance.emissive_intensity = emissive_intensity;
                instance.metalness = metalness;
                instance.roughness = roughness;
                if tone_mapped {
                    instance.flags |= FLAG_TONE_MAPPED;
                }
            }
            Material::Shadow { opacity } => {
                instance.opacity = opacity;
                instance.flags |= FLAG_SHADOW_ONLY;
            }
        }

        instance
    }

    pub fn translation(&self) -> glam::Vec3 {
        Mat4::from_cols_array_2d(&self.model).w_axis.truncate()
    }
}

/// World-space instances for every mesh in the scene, depth-first order.
/// Animated nodes contribute whatever pose was last applied to them.
pub fn flatten(scene: &Scene) -> Vec<InstanceData> {
    let mut out = Vec::new();
    collect(&scene.root, Mat4::IDENTITY, &mut out);
    out
}

fn collect(node: &SceneNode, parent: Mat4, out: &mut Vec<InstanceData>) {
    let world = parent * node.transform.to_matrix();

    if let NodeKind::Mesh {
        shape,
        material,
        cast_shadow,
        receive_shadow,
    } = &node.kind
    {
        out.push(InstanceData::new(world, shape, material, *cast_shadow, *receive_shadow));
    }

    for child in node.children() {
        collect(child, world, out);
    }
}

pub fn as_bytes(instances: &[InstanceData]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
