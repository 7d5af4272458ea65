//! Configuration schema definitions
//!
//! Defines the structure of the settings file using serde for serialization.

use crate::fields::EditorSettings;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Show values without allowing edits
    #[serde(default = "default_false")]
    pub read_only: bool,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Field editor configuration
    #[serde(default)]
    pub editor: EditorConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Enable mouse support
    #[serde(default = "default_false")]
    pub enable_mouse: bool,

    /// Disable Unicode icons for compatibility
    #[serde(default = "default_false")]
    pub no_icons: bool,
}

/// Field editor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Amount one keypress moves a color channel
    #[serde(default = "default_nudge_step")]
    pub nudge_step: u8,
}

// Default value functions
fn default_false() -> bool {
    false
}

fn default_nudge_step() -> u8 {
    EditorSettings::default().nudge_step
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_only: default_false(),
            ui: UiConfig::default(),
            editor: EditorConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_mouse: default_false(),
            no_icons: default_false(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            nudge_step: default_nudge_step(),
        }
    }
}

impl Config {
    /// Editor tuning derived from this configuration
    pub fn editor_settings(&self) -> EditorSettings {
        EditorSettings {
            nudge_step: self.editor.nudge_step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(!config.read_only);
        assert!(!config.ui.enable_mouse);
        assert_eq!(config.editor.nudge_step, 16);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("readOnly"));
        assert!(yaml.contains("nudgeStep"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
readOnly: true
ui:
  noIcons: true
editor:
  nudgeStep: 4
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.read_only);
        assert!(config.ui.no_icons);
        assert!(!config.ui.enable_mouse);
        assert_eq!(config.editor_settings().nudge_step, 4);
    }
}
