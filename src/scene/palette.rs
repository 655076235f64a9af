use crate::math::Color;
use crate::state::{LightsColor, Theme, TreeState};

pub const WARM_WHITE: Color = Color::hex(0xffebcd);
pub const RED: Color = Color::hex(0xff0000);
pub const BLUE: Color = Color::hex(0x0000ff);
pub const GOLD: Color = Color::hex(0xffd700);
pub const SILVER: Color = Color::hex(0xc0c0c0);

/// Colors that follow `TreeState`; everything else in the scene is fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenePalette {
    /// Fairy-light color and emissive
    pub lights: Color,
    /// Non-red ornaments
    pub ornament: Color,
}

impl ScenePalette {
    pub fn from_state(state: &TreeState) -> Self {
        Self {
            lights: lights_color(state.lights_color),
            ornament: ornament_color(state.theme),
        }
    }
}

impl Default for ScenePalette {
    fn default() -> Self {
        Self::from_state(&TreeState::default())
    }
}

/// Unrecognized values render warm white
pub fn lights_color(lights: LightsColor) -> Color {
    match lights {
        LightsColor::WarmWhite => WARM_WHITE,
        LightsColor::Red => RED,
        LightsColor::Blue => BLUE,
        LightsColor::Unrecognized => WARM_WHITE,
    }
}

/// Only the emerald/gold theme is gold; anything else renders silver
pub fn ornament_color(theme: Theme) -> Color {
    match theme {
        Theme::EmeraldGold => GOLD,
        Theme::Silver | Theme::Unrecognized => SILVER,
    }
}
