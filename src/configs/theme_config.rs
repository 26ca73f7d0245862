use serde::Deserialize;

use crate::error::ThemeError;

pub const STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark-theme";
pub const TOGGLE_ID: &str = "theme-toggle";
/// Shown while dark: the glyph of the theme a click switches to.
pub const DARK_ICON: &str = "🌞";
pub const LIGHT_ICON: &str = "🌙";

/// Names and glyphs the controller works with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub toggle_id: String,
    pub dark_icon: String,
    pub light_icon: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            dark_class: DARK_CLASS.to_string(),
            toggle_id: TOGGLE_ID.to_string(),
            dark_icon: DARK_ICON.to_string(),
            light_icon: LIGHT_ICON.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parses an override blob. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let config: ThemeConfig = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Replaces blank fields, and a class name a class list would reject, with their defaults.
    pub fn validated(self) -> Self {
        let defaults = ThemeConfig::default();
        Self {
            storage_key: or_default("storage_key", self.storage_key, defaults.storage_key),
            dark_class: or_default_token("dark_class", self.dark_class, defaults.dark_class),
            toggle_id: or_default("toggle_id", self.toggle_id, defaults.toggle_id),
            dark_icon: or_default("dark_icon", self.dark_icon, defaults.dark_icon),
            light_icon: or_default("light_icon", self.light_icon, defaults.light_icon),
        }
    }
}

fn or_default(field: &str, value: String, default: String) -> String {
    if value.trim().is_empty() {
        log::warn!("{} is blank, using default '{}'", field, default);
        default
    } else {
        value
    }
}

fn or_default_token(field: &str, value: String, default: String) -> String {
    if value.chars().any(char::is_whitespace) && !value.trim().is_empty() {
        log::warn!("{} '{}' contains whitespace, using default '{}'", field, value, default);
        return default;
    }
    or_default(field, value, default)
}
