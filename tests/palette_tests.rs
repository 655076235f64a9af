use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_scene::math::Color;
use tree_scene::scene::{
    lights_color, ornament_color, Scene, SceneBuilder, ScenePalette, BLUE, GOLD, RED, SILVER,
    WARM_WHITE,
};
use tree_scene::state::{LightsColor, Theme, TreeState};
use tree_scene::types::SceneNode;

fn build(state: &TreeState) -> Scene {
    SceneBuilder::with_rng(&mut StdRng::seed_from_u64(1)).build(state)
}

fn meshes_with_prefix<'a>(scene: &'a Scene, prefix: &str) -> Vec<&'a SceneNode> {
    scene
        .root
        .meshes()
        .into_iter()
        .filter(|m| m.name.starts_with(prefix))
        .collect()
}

/// Ornament meshes split into (red type, theme colored)
fn ornaments(scene: &Scene) -> (Vec<&SceneNode>, Vec<&SceneNode>) {
    meshes_with_prefix(scene, "ornament_").into_iter().partition(|m| {
        // names are ornament_{layer}_{index}
        let mut parts = m.name.trim_start_matches("ornament_").split('_');
        let layer: usize = parts.next().unwrap().parse().unwrap();
        let index: usize = parts.next().unwrap().parse().unwrap();
        (layer + index) % 3 == 2
    })
}

#[cfg(test)]
mod mapping_tests {
    use super::*;

    #[test]
    fn test_lights_mapping() {
        assert_eq!(lights_color(LightsColor::WarmWhite), Color::hex(0xffebcd));
        assert_eq!(lights_color(LightsColor::Red), Color::hex(0xff0000));
        assert_eq!(lights_color(LightsColor::Blue), Color::hex(0x0000ff));
    }

    #[test]
    fn test_theme_mapping() {
        assert_eq!(ornament_color(Theme::EmeraldGold), Color::hex(0xffd700));
        assert_eq!(ornament_color(Theme::Silver), Color::hex(0xc0c0c0));
    }

    #[test]
    fn test_unrecognized_values_fall_back() {
        assert_eq!(lights_color(LightsColor::Unrecognized), WARM_WHITE);
        assert_eq!(ornament_color(Theme::Unrecognized), SILVER);
    }

    #[test]
    fn test_default_palette() {
        let palette = ScenePalette::default();
        assert_eq!(palette.lights, WARM_WHITE);
        assert_eq!(palette.ornament, GOLD);
    }
}

#[cfg(test)]
mod scene_color_tests {
    use super::*;

    #[test]
    fn test_red_lights_with_gold_theme() {
        let state = TreeState::from_json(
            r#"{"lights_color":"red","ornament_texture":"x","theme":"emerald_gold"}"#,
        )
        .unwrap();
        let scene = build(&state);

        let lights = meshes_with_prefix(&scene, "fairy_light_");
        assert_eq!(lights.len(), 100);
        for light in lights {
            let material = light.material().unwrap();
            assert_eq!(material.emissive(), Some(RED));
            assert_eq!(material.color(), Some(RED));
        }

        let (red, themed) = ornaments(&scene);
        assert!(!red.is_empty());
        for o in red {
            assert_eq!(o.material().unwrap().color(), Some(RED));
        }
        for o in themed {
            assert_eq!(o.material().unwrap().color(), Some(GOLD));
        }
    }

    #[test]
    fn test_blue_lights_with_silver_theme() {
        let scene = build(&TreeState::new(LightsColor::Blue, "frost", Theme::Silver));

        for light in meshes_with_prefix(&scene, "fairy_light_") {
            assert_eq!(light.material().unwrap().emissive(), Some(BLUE));
        }
        let (_, themed) = ornaments(&scene);
        for o in themed {
            assert_eq!(o.material().unwrap().color(), Some(SILVER));
        }
    }

    #[test]
    fn test_default_state_colors() {
        let scene = build(&TreeState::default());

        for light in meshes_with_prefix(&scene, "fairy_light_") {
            assert_eq!(light.material().unwrap().emissive(), Some(WARM_WHITE));
        }
        let (_, themed) = ornaments(&scene);
        for o in themed {
            assert_eq!(o.material().unwrap().color(), Some(GOLD));
        }
    }

    #[test]
    fn test_garland_and_trunk_ignore_theme() {
        let gold = build(&TreeState::default());
        let silver = build(&TreeState::new(LightsColor::Red, "x", Theme::Silver));

        for name in ["garland", "trunk", "foliage_0_outer", "foliage_0_inner"] {
            let a = gold.root.find(name).unwrap().material().unwrap();
            let b = silver.root.find(name).unwrap().material().unwrap();
            assert_eq!(a, b, "{} should not follow state", name);
        }
    }

    #[test]
    fn test_unknown_strings_render_fallbacks() {
        let state = TreeState::from_json(r#"{"lights_color":"purple","theme":"neon"}"#).unwrap();
        let scene = build(&state);

        for light in meshes_with_prefix(&scene, "fairy_light_") {
            assert_eq!(light.material().unwrap().emissive(), Some(WARM_WHITE));
        }
        let (_, themed) = ornaments(&scene);
        for o in themed {
            assert_eq!(o.material().unwrap().color(), Some(SILVER));
        }
    }

    #[test]
    fn test_null_theme_renders_silver_with_red_lights() {
        let state = TreeState::from_json(r#"{"lights_color":"red","theme":null}"#).unwrap();
        let scene = build(&state);

        for light in meshes_with_prefix(&scene, "fairy_light_") {
            assert_eq!(light.material().unwrap().emissive(), Some(RED));
        }
        let (_, themed) = ornaments(&scene);
        for o in themed {
            assert_eq!(o.material().unwrap().color(), Some(SILVER));
        }
    }
}
