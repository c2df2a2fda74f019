//! Keyboard configuration.
//!
//! Every field has a default matching the stock markup, so an empty JSON
//! object (or no configuration at all) yields a working keyboard.

use keyboard_core::Panel;
use log::LevelFilter;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyboardConfig {
    /// `id` of the keyboard container element.
    pub container_id: String,
    /// CSS selector an element must match to receive keyboard input.
    pub target_selector: String,
    pub alphabet_panel_id: String,
    pub symbols_panel_id: String,
    pub toggle_symbols_id: String,
    pub toggle_alphabet_id: String,
    /// CSS selector of the shift key, relative to the container.
    pub shift_selector: String,
    /// Class carried by every key element.
    pub key_class: String,
    /// Class toggled on the shift key while shift is active.
    pub shift_active_class: String,
    #[serde(deserialize_with = "deserialize_panel")]
    pub initial_panel: Panel,
    pub start_visible: bool,
    /// `log` level name: off, error, warn, info, debug or trace.
    pub log_level: String,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            container_id: "onscreen-keyboard".into(),
            target_selector: ".virtual-keyboard-target".into(),
            alphabet_panel_id: "alphabet-panel".into(),
            symbols_panel_id: "symbols-panel".into(),
            toggle_symbols_id: "toggle-symbols-btn".into(),
            toggle_alphabet_id: "toggle-alphabet-btn".into(),
            shift_selector: ".shift-btn".into(),
            key_class: "key".into(),
            shift_active_class: "shift-active".into(),
            initial_panel: Panel::Alphabet,
            start_visible: false,
            log_level: "info".into(),
        }
    }
}

impl KeyboardConfig {
    /// Parse and validate a JSON configuration object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: KeyboardConfig = serde_json::from_str(json).map_err(ConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    /// `from_json` for `Some`, defaults for `None` or blank input.
    pub fn from_optional_json(json: Option<&str>) -> Result<Self, ConfigError> {
        match json.map(str::trim) {
            Some(json) if !json.is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.level_filter()?;
        if self.key_class.trim().is_empty() {
            return Err(ConfigError::Empty("key_class"));
        }
        if self.target_selector.trim().is_empty() {
            return Err(ConfigError::Empty("target_selector"));
        }
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Selector matching any key element, e.g. `.key`.
    pub fn key_selector(&self) -> String {
        format!(".{}", self.key_class)
    }
}

fn deserialize_panel<'de, D: Deserializer<'de>>(d: D) -> Result<Panel, D::Error> {
    let name = String::deserialize(d)?;
    name.parse().map_err(serde::de::Error::custom)
}

#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    InvalidLogLevel(String),
    Empty(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Json(err) => write!(f, "invalid keyboard config: {err}"),
            ConfigError::InvalidLogLevel(level) => write!(f, "unknown log level: {level:?}"),
            ConfigError::Empty(field) => write!(f, "config field `{field}` must not be empty"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(err) => Some(err),
            _ => None,
        }
    }
}
