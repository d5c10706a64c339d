//! Error handling for Taskmaster.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod predictor_error;

pub use config_error::ConfigError;
pub use error_code::TaskmasterErrorCode;
pub use predictor_error::{PredictorError, PredictorResult};
