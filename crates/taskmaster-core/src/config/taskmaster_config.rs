//! Top-level Taskmaster configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ConfigFormat, PredictorConfig};
use crate::constants::{ENV_PREDICTOR_CAPACITY, PROJECT_CONFIG_FILE, PROJECT_CONFIG_FILE_YAML};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`TASKMASTER_*`)
/// 3. Project config (`taskmaster.toml`, else `taskmaster.yaml`, in the root)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaskmasterConfig {
    pub predictor: PredictorConfig,
}

/// Override arguments supplied by the embedding scheduler.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub predictor_capacity: Option<usize>,
}

impl TaskmasterConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        if let Some(path) = Self::project_config_path(root) {
            debug!(path = %path.display(), "loading project config");
            let file_config = Self::load_file(&path)?;
            Self::merge(&mut config, &file_config);
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a single config file, picking TOML or YAML from its extension.
    /// Unknown keys are ignored.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = ConfigFormat::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Toml.parse(toml_str, "<string>")
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml_str: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Yaml.parse(yaml_str, "<string>")
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.predictor.validate()
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// `taskmaster.toml` wins over `taskmaster.yaml` when both exist.
    fn project_config_path(root: &Path) -> Option<PathBuf> {
        [PROJECT_CONFIG_FILE, PROJECT_CONFIG_FILE_YAML]
            .iter()
            .map(|name| root.join(name))
            .find(|path| path.exists())
    }

    /// Merge `other` into `base`; only `Some` values in `other` override.
    fn merge(base: &mut TaskmasterConfig, other: &TaskmasterConfig) {
        if other.predictor.capacity.is_some() {
            base.predictor.capacity = other.predictor.capacity;
        }
    }

    /// Apply environment variable overrides.
    /// An unparsable capacity is a config error rather than silently ignored.
    fn apply_env_overrides(config: &mut TaskmasterConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(ENV_PREDICTOR_CAPACITY) {
            let capacity = val
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::ValidationFailed {
                    field: ENV_PREDICTOR_CAPACITY.to_string(),
                    message: format!("expected a positive integer, got {val:?}: {e}"),
                })?;
            debug!(capacity, "predictor capacity overridden from environment");
            config.predictor.capacity = Some(capacity);
        }
        Ok(())
    }

    fn apply_overrides(config: &mut TaskmasterConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.predictor_capacity {
            config.predictor.capacity = Some(v);
        }
    }
}
