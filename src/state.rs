//! User-adjustable tree attributes.
//!
//! The record is always complete: fields missing from a payload take their
//! default, and unknown enum values (including `null` or non-strings) land in
//! an `Unrecognized` variant that the palette maps to a fallback color. A bad
//! field never discards the rest of the payload.

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_ORNAMENT_TEXTURE: &str = "default_gold";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightsColor {
    #[default]
    WarmWhite,
    Red,
    Blue,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    EmeraldGold,
    Silver,
    #[serde(other)]
    Unrecognized,
}

/// Enums with a catch-all variant for values they do not know
trait Fallback: DeserializeOwned {
    const FALLBACK: Self;
}

impl Fallback for LightsColor {
    const FALLBACK: Self = LightsColor::Unrecognized;
}

impl Fallback for Theme {
    const FALLBACK: Self = Theme::Unrecognized;
}

fn lenient_enum<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Fallback,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(&value).unwrap_or_else(|_| {
        debug!("Unrecognized state value {}", value);
        T::FALLBACK
    }))
}

fn lenient_texture<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(texture) => Ok(texture),
        other => {
            debug!("Ignoring ornament texture {}", other);
            Ok(DEFAULT_ORNAMENT_TEXTURE.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeState {
    #[serde(deserialize_with = "lenient_enum")]
    pub lights_color: LightsColor,
    #[serde(deserialize_with = "lenient_texture")]
    pub ornament_texture: String,
    #[serde(deserialize_with = "lenient_enum")]
    pub theme: Theme,
}

impl Default for TreeState {
    fn default() -> Self {
        Self {
            lights_color: LightsColor::default(),
            ornament_texture: DEFAULT_ORNAMENT_TEXTURE.to_string(),
            theme: Theme::default(),
        }
    }
}

impl TreeState {
    pub fn new(lights_color: LightsColor, ornament_texture: impl Into<String>, theme: Theme) -> Self {
        Self {
            lights_color,
            ornament_texture: ornament_texture.into(),
            theme,
        }
    }

    /// Parse a JSON payload; missing fields keep their defaults.
    /// Only a payload that is not a JSON object (or array of fields) is an error.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> String {
        // Plain enums and a string cannot fail to serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = TreeState::default();
        assert_eq!(state.lights_color, LightsColor::WarmWhite);
        assert_eq!(state.ornament_texture, "default_gold");
        assert_eq!(state.theme, Theme::EmeraldGold);
    }

    #[test]
    fn test_snake_case_wire_names() {
        let state = TreeState::new(LightsColor::WarmWhite, "x", Theme::EmeraldGold);
        let json = state.to_json();
        assert!(json.contains("\"warm_white\""));
        assert!(json.contains("\"emerald_gold\""));
    }

    #[test]
    fn test_null_fields_fall_back() {
        let state = TreeState::from_json(r#"{"lights_color":null,"ornament_texture":null,"theme":null}"#).unwrap();
        assert_eq!(state.lights_color, LightsColor::Unrecognized);
        assert_eq!(state.ornament_texture, DEFAULT_ORNAMENT_TEXTURE);
        assert_eq!(state.theme, Theme::Unrecognized);
    }
}
