//! Configuration system for schemaform
//!
//! Application settings (not form values): a YAML file in the config
//! directory, overridable from the environment.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, EditorConfig, UiConfig};

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "readOnly" => Ok(config.read_only.to_string()),
        "ui.enableMouse" => Ok(config.ui.enable_mouse.to_string()),
        "ui.noIcons" => Ok(config.ui.no_icons.to_string()),
        "editor.nudgeStep" => Ok(config.editor.nudge_step.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "readOnly" => {
            config.read_only = value
                .parse()
                .context("readOnly must be 'true' or 'false'")?;
        }
        "ui.enableMouse" => {
            config.ui.enable_mouse = value
                .parse()
                .context("ui.enableMouse must be 'true' or 'false'")?;
        }
        "ui.noIcons" => {
            config.ui.no_icons = value
                .parse()
                .context("ui.noIcons must be 'true' or 'false'")?;
        }
        "editor.nudgeStep" => {
            let step: u8 = value
                .parse()
                .context("editor.nudgeStep must be a number between 1 and 255")?;
            if step == 0 {
                return Err(anyhow::anyhow!("editor.nudgeStep must be at least 1"));
            }
            config.editor.nudge_step = step;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_round_trip() {
        let mut config = Config::default();
        set_config_value(&mut config, "readOnly", "true").unwrap();
        set_config_value(&mut config, "editor.nudgeStep", "5").unwrap();

        assert_eq!(get_config_value(&config, "readOnly").unwrap(), "true");
        assert_eq!(get_config_value(&config, "editor.nudgeStep").unwrap(), "5");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "ui.enableMouse", "maybe").is_err());
        assert!(set_config_value(&mut config, "editor.nudgeStep", "0").is_err());
        assert!(set_config_value(&mut config, "editor.nudgeStep", "300").is_err());
        assert!(set_config_value(&mut config, "nope", "1").is_err());
        assert!(get_config_value(&config, "nope").is_err());
    }
}
