use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_scene::instances::{
    as_bytes, flatten, InstanceData, FLAG_CAST_SHADOW, FLAG_RECEIVE_SHADOW, FLAG_SHADOW_ONLY,
    FLAG_TONE_MAPPED,
};
use tree_scene::scene::{fairy_light_positions, Scene, SceneBuilder, FAIRY_LIGHT_COUNT, TREE_ORIGIN};
use tree_scene::state::TreeState;

fn scene() -> Scene {
    SceneBuilder::with_rng(&mut StdRng::seed_from_u64(13)).build(&TreeState::default())
}

/// Index of a named mesh in flatten's depth-first order
fn mesh_index(scene: &Scene, name: &str) -> usize {
    scene
        .root
        .meshes()
        .iter()
        .position(|m| m.name == name)
        .unwrap()
}

#[cfg(test)]
mod instance_layout_tests {
    use super::*;

    #[test]
    fn test_instance_size() {
        assert_eq!(std::mem::size_of::<InstanceData>(), 112);
    }

    #[test]
    fn test_one_instance_per_mesh() {
        let scene = scene();
        let flat = flatten(&scene);

        assert_eq!(flat.len(), scene.root.meshes().len());
        assert_eq!(as_bytes(&flat).len(), flat.len() * 112);
    }
}

#[cfg(test)]
mod instance_transform_tests {
    use super::*;

    #[test]
    fn test_fairy_lights_in_world_space() {
        let scene = scene();
        let flat = flatten(&scene);
        let local = fairy_light_positions(FAIRY_LIGHT_COUNT);

        for (i, p) in local.iter().enumerate() {
            let instance = &flat[mesh_index(&scene, &format!("fairy_light_{i}"))];
            assert!(instance.translation().distance(*p + TREE_ORIGIN) < 1e-5);
            assert_ne!(instance.flags & FLAG_TONE_MAPPED, FLAG_TONE_MAPPED);
            assert_eq!(instance.emissive_intensity, 3.0);
        }
    }

    #[test]
    fn test_sway_rotates_world_positions() {
        let mut scene = scene();
        scene.apply_frame(15.0);
        let flat = flatten(&scene);

        let instance = &flat[mesh_index(&scene, "fairy_light_0")];
        let world = instance.translation();
        // first light sits on +x, so a yaw moves it off the z = 0 plane
        assert!(world.z.abs() > 1e-3);
        assert!((world.y - (0.5 + TREE_ORIGIN.y)).abs() < 1e-5);
        let radius = Vec3::new(world.x, 0.0, world.z).length();
        assert!((radius - 1.85).abs() < 1e-4);
    }

    #[test]
    fn test_ground_is_shadow_only() {
        let scene = scene();
        let flat = flatten(&scene);
        let ground = &flat[mesh_index(&scene, "ground")];

        assert!(ground.translation().distance(Vec3::new(0.0, -2.5, 0.0)) < 1e-6);
        assert_eq!(ground.flags & FLAG_SHADOW_ONLY, FLAG_SHADOW_ONLY);
        assert_eq!(ground.flags & FLAG_RECEIVE_SHADOW, FLAG_RECEIVE_SHADOW);
        assert_eq!(ground.flags & FLAG_CAST_SHADOW, 0);
        assert_eq!(ground.opacity, 0.5);
    }

    #[test]
    fn test_trunk_material() {
        let scene = scene();
        let flat = flatten(&scene);
        let trunk = &flat[mesh_index(&scene, "trunk")];

        assert!(trunk.translation().distance(Vec3::new(0.0, 1.0, 0.0) + TREE_ORIGIN) < 1e-6);
        assert_eq!(trunk.flags & FLAG_CAST_SHADOW, FLAG_CAST_SHADOW);
        assert_eq!(trunk.flags & FLAG_TONE_MAPPED, FLAG_TONE_MAPPED);
        assert_eq!(trunk.roughness, 0.9);
    }
}
