//! Predictor configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigFormat;
use crate::constants::MIN_PREDICTOR_CAPACITY;
use crate::errors::ConfigError;

/// Configuration for the invocation predictor.
///
/// There is no compiled-in default capacity: a predictor built from a
/// config without one fails with [`ConfigError::MissingValue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PredictorConfig {
    /// Maximum number of distinct function names retained.
    /// `size` is accepted as an alias for older scheduler configs.
    #[serde(alias = "size")]
    pub capacity: Option<usize>,
}

impl PredictorConfig {
    /// Config with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
        }
    }

    /// Parse a standalone predictor config from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Toml.parse(toml_str, "<string>")
    }

    /// Parse a standalone predictor config from a YAML string.
    pub fn from_yaml(yaml_str: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Yaml.parse(yaml_str, "<string>")
    }

    /// Load a standalone predictor config file (`capacity` at top level).
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = ConfigFormat::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a capacity below the minimum. A missing capacity passes here
    /// and is only an error once a predictor is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(capacity) = self.capacity {
            if capacity < MIN_PREDICTOR_CAPACITY {
                return Err(ConfigError::ValidationFailed {
                    field: "predictor.capacity".to_string(),
                    message: format!("must be at least {MIN_PREDICTOR_CAPACITY}, got {capacity}"),
                });
            }
        }
        Ok(())
    }

    /// The validated capacity a predictor should be built with.
    pub fn effective_capacity(&self) -> Result<usize, ConfigError> {
        self.validate()?;
        self.capacity.ok_or_else(|| ConfigError::MissingValue {
            field: "predictor.capacity".to_string(),
        })
    }
}
