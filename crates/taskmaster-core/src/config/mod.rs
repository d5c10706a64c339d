//! Configuration system for Taskmaster.
//! TOML or YAML, layered resolution: overrides > env > project file > defaults.

pub mod format;
pub mod predictor_config;
pub mod taskmaster_config;

pub use format::ConfigFormat;
pub use predictor_config::PredictorConfig;
pub use taskmaster_config::{ConfigOverrides, TaskmasterConfig};
