use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::Color;

/// Local transform of a scene node, rotation as XYZ Euler angles in radians
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn to_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Geometry of a mesh, in the mesh's local space
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Dodecahedron {
        radius: f32,
    },
    Box {
        size: Vec3,
    },
    RoundedBox {
        size: Vec3,
        radius: f32,
        smoothness: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
        arc: f32,
    },
    /// Swept circle along a sampled path
    Tube {
        path: Vec<Vec3>,
        radius: f32,
        radial_segments: u32,
        closed: bool,
    },
    Plane {
        width: f32,
        height: f32,
    },
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Cylinder { .. } => "cylinder",
            Shape::Cone { .. } => "cone",
            Shape::Sphere { .. } => "sphere",
            Shape::Dodecahedron { .. } => "dodecahedron",
            Shape::Box { .. } => "box",
            Shape::RoundedBox { .. } => "rounded_box",
            Shape::Torus { .. } => "torus",
            Shape::Tube { .. } => "tube",
            Shape::Plane { .. } => "plane",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    /// Metallic-roughness PBR surface
    Standard {
        color: Color,
        emissive: Color,
        emissive_intensity: f32,
        metalness: f32,
        roughness: f32,
        tone_mapped: bool,
    },
    /// Invisible surface that only darkens where shadows fall
    Shadow { opacity: f32 },
}

impl Material {
    pub const fn standard(color: Color, metalness: f32, roughness: f32) -> Self {
        Material::Standard {
            color,
            emissive: Color::BLACK,
            emissive_intensity: 1.0,
            metalness,
            roughness,
            tone_mapped: true,
        }
    }

    /// Plain matte surface
    pub const fn matte(color: Color) -> Self {
        Self::standard(color, 0.0, 1.0)
    }

    /// Self-lit surface that bypasses tone mapping so bloom picks it up
    pub const fn glowing(color: Color, intensity: f32) -> Self {
        Material::Standard {
            color,
            emissive: color,
            emissive_intensity: intensity,
            metalness: 0.0,
            roughness: 1.0,
            tone_mapped: false,
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Material::Standard { color, .. } => Some(*color),
            Material::Shadow { .. } => None,
        }
    }

    pub fn emissive(&self) -> Option<Color> {
        match self {
            Material::Standard { emissive, .. } => Some(*emissive),
            Material::Shadow { .. } => None,
        }
    }
}

/// Drifting point-sprite cloud filling a box of side `scale`
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SparkleEmitter {
    pub count: u32,
    pub scale: f32,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
    pub color: Color,
}

/// Gentle bobbing applied to a node on top of its rest transform
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    pub floating_range: [f32; 2],
    /// Phase offset in seconds so props don't bob in lockstep
    pub offset: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Group {
        children: Vec<SceneNode>,
    },
    Mesh {
        shape: Shape,
        material: Material,
        cast_shadow: bool,
        receive_shadow: bool,
    },
    Sparkles {
        emitter: SparkleEmitter,
    },
    Float {
        params: FloatParams,
        child: Box<SceneNode>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub kind: NodeKind,
}

impl SceneNode {
    pub fn group(name: impl Into<String>, transform: Transform, children: Vec<SceneNode>) -> Self {
        Self {
            name: name.into(),
            transform,
            kind: NodeKind::Group { children },
        }
    }

    pub fn mesh(name: impl Into<String>, transform: Transform, shape: Shape, material: Material) -> Self {
        Self {
            name: name.into(),
            transform,
            kind: NodeKind::Mesh {
                shape,
                material,
                cast_shadow: false,
                receive_shadow: false,
            },
        }
    }

    pub fn sparkles(name: impl Into<String>, position: Vec3, emitter: SparkleEmitter) -> Self {
        Self {
            name: name.into(),
            transform: Transform::at(position),
            kind: NodeKind::Sparkles { emitter },
        }
    }

    pub fn floating(name: impl Into<String>, params: FloatParams, child: SceneNode) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            kind: NodeKind::Float {
                params,
                child: Box::new(child),
            },
        }
    }

    /// Sets the shadow flags; no-op on non-mesh nodes
    pub fn shadows(mut self, cast: bool, receive: bool) -> Self {
        if let NodeKind::Mesh {
            cast_shadow,
            receive_shadow,
            ..
        } = &mut self.kind
        {
            *cast_shadow = cast;
            *receive_shadow = receive;
        }
        self
    }

    pub fn children(&self) -> &[SceneNode] {
        match &self.kind {
            NodeKind::Group { children } => children,
            NodeKind::Float { child, .. } => std::slice::from_ref(child.as_ref()),
            _ => &[],
        }
    }

    /// First descendant (or self) with the given name, depth first
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut SceneNode> {
        if self.name == name {
            return Some(self);
        }
        match &mut self.kind {
            NodeKind::Group { children } => children.iter_mut().find_map(|child| child.find_mut(name)),
            NodeKind::Float { child, .. } => child.find_mut(name),
            _ => None,
        }
    }

    /// Visits every node, parents before children
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a SceneNode)) {
        visit(self);
        for child in self.children() {
            child.walk(&mut *visit);
        }
    }

    /// All mesh nodes in depth-first order
    pub fn meshes(&self) -> Vec<&SceneNode> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if matches!(node.kind, NodeKind::Mesh { .. }) {
                out.push(node);
            }
        });
        out
    }

    pub fn material(&self) -> Option<&Material> {
        match &self.kind {
            NodeKind::Mesh { material, .. } => Some(material),
            _ => None,
        }
    }

    pub fn shape(&self) -> Option<&Shape> {
        match &self.kind {
            NodeKind::Mesh { shape, .. } => Some(shape),
            _ => None,
        }
    }
}
