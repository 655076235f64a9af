mod environment;
mod garland;
mod palette;
mod props;
mod tree;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::animation;
use crate::state::TreeState;
use crate::types::{NodeKind, SceneNode, Transform};

pub use environment::*;
pub use garland::{
    garland_control_points, garland_node, garland_path, GARLAND_OFFSET, GARLAND_TUBULAR_SEGMENTS,
};
pub use palette::*;
pub use props::{
    generate as generate_props, generate_with as generate_props_with, prop_node, props_node,
    PropKind, RoamingProp, PROP_COLORS, PROP_COUNT,
};
pub use tree::*;

/// Renderable description of the whole scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub root: SceneNode,
    pub environment: Environment,
}

impl Scene {
    pub fn tree(&self) -> Option<&SceneNode> {
        self.root.find(TREE_NAME)
    }

    /// Poses animated nodes for the given elapsed time
    pub fn apply_frame(&mut self, elapsed: f32) {
        if let Some(tree) = self.root.find_mut(TREE_NAME) {
            tree.transform = animation::tree_transform(TREE_ORIGIN, elapsed);
        }
        pose_floats(&mut self.root, elapsed);
    }
}

fn pose_floats(node: &mut SceneNode, elapsed: f32) {
    match &mut node.kind {
        NodeKind::Float { params, child } => {
            node.transform = animation::float_transform(params, elapsed);
            pose_floats(child, elapsed);
        }
        NodeKind::Group { children } => {
            for child in children {
                pose_floats(child, elapsed);
            }
        }
        _ => {}
    }
}

/// Holds the memoized geometry; `build` only re-derives material colors.
pub struct SceneBuilder {
    layout: TreeLayout,
    props: Vec<RoamingProp>,
    environment: Environment,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::with_props(generate_props())
    }

    /// Deterministic props, for reproducible output
    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        Self::with_props(generate_props_with(rng))
    }

    pub fn with_props(props: Vec<RoamingProp>) -> Self {
        let layout = TreeLayout::new();
        debug!(
            "Tree layout: {} layers, {} ornaments in {} rings, {} fairy lights, {} garland samples",
            layout.layers.len(),
            layout.ornament_count(),
            layout.rings.len(),
            layout.fairy_lights.len(),
            layout.garland.len()
        );

        Self {
            layout,
            props,
            environment: Environment::default(),
        }
    }

    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }

    pub fn props(&self) -> &[RoamingProp] {
        &self.props
    }

    pub fn build(&self, state: &TreeState) -> Scene {
        let palette = ScenePalette::from_state(state);
        debug!(
            "Building scene: lights {} ornaments {}",
            palette.lights, palette.ornament
        );

        let root = SceneNode::group(
            "scene",
            Transform::IDENTITY,
            vec![
                props_node(&self.props),
                build_tree(&self.layout, &palette),
                ground_node(),
            ],
        );

        Scene {
            root,
            environment: self.environment.clone(),
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
