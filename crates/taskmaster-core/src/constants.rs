/// Project-level config file looked up by `TaskmasterConfig::load`.
pub const PROJECT_CONFIG_FILE: &str = "taskmaster.toml";

/// YAML alternative to the project config file.
pub const PROJECT_CONFIG_FILE_YAML: &str = "taskmaster.yaml";

/// Environment variable overriding the predictor capacity.
pub const ENV_PREDICTOR_CAPACITY: &str = "TASKMASTER_PREDICTOR_CAPACITY";

/// Environment variable holding the tracing filter directives.
pub const ENV_LOG: &str = "TASKMASTER_LOG";

/// Smallest capacity a predictor accepts.
pub const MIN_PREDICTOR_CAPACITY: usize = 1;
