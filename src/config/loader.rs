//! Configuration loading and merging logic
//!
//! Handles loading configuration from the settings file and environment and
//! merging them according to precedence rules.

use super::{paths, schema::Config};
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        let mut config = Self::load_defaults();

        let root_path = paths::root_config_path();
        if root_path.exists() {
            let root_config = Self::load_file(&root_path)?;
            config = Self::merge_config(config, root_config);
        }

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration by loading and checking for errors
    pub fn validate() -> Result<()> {
        let config = Self::load().context("Failed to load merged configuration")?;

        if config.editor.nudge_step == 0 {
            return Err(anyhow::anyhow!("editor.nudgeStep must be at least 1"));
        }

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Merge two configurations, with `other` taking precedence
    fn merge_config(_base: Config, other: Config) -> Config {
        Config {
            read_only: other.read_only,
            ui: other.ui,
            editor: other.editor,
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        // SCHEMAFORM_READ_ONLY override
        if let Ok(read_only) = std::env::var("SCHEMAFORM_READ_ONLY") {
            if let Ok(val) = read_only.parse::<bool>() {
                config.read_only = val;
            }
        }

        // SCHEMAFORM_NUDGE_STEP override
        if let Ok(step) = std::env::var("SCHEMAFORM_NUDGE_STEP") {
            match step.parse::<u8>() {
                Ok(val) => config.editor.nudge_step = val,
                Err(_) => tracing::warn!("Ignoring invalid SCHEMAFORM_NUDGE_STEP: {}", step),
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(!config.read_only);
        assert_eq!(config.editor.nudge_step, 16);
    }

    #[test]
    fn test_merge_config() {
        let base = Config::default();
        let other = Config {
            read_only: true,
            ..Default::default()
        };

        let merged = ConfigLoader::merge_config(base, other);
        assert!(merged.read_only);
    }

    #[test]
    fn test_save_and_load_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("nested").join("config.yaml");
        let mut config = Config::default();
        config.editor.nudge_step = 8;

        ConfigLoader::save(&config, &path).unwrap();
        let loaded = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::load_file(&temp.path().join("missing.yaml")).is_err());
    }

    #[test]
    fn test_env_overrides() {
        // SAFETY: set_var is unsafe in Rust 2024 due to potential data races.
        // No other test reads these variables.
        unsafe {
            std::env::set_var("SCHEMAFORM_READ_ONLY", "true");
            std::env::set_var("SCHEMAFORM_NUDGE_STEP", "not-a-number");
        }

        let config = ConfigLoader::apply_env_overrides(Config::default());

        assert!(config.read_only);
        assert_eq!(config.editor.nudge_step, 16);

        // SAFETY: see above.
        unsafe {
            std::env::remove_var("SCHEMAFORM_READ_ONLY");
            std::env::remove_var("SCHEMAFORM_NUDGE_STEP");
        }
    }
}
