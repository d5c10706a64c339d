//! # taskmaster-core
//!
//! Foundation crate for the Taskmaster invocation predictor.
//! Defines the request model, the predictor trait, errors, config, tracing
//! setup, and constants. The prediction crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{PredictorConfig, TaskmasterConfig};
pub use errors::{ConfigError, PredictorError, PredictorResult};
pub use models::{FunctionRequest, UpdateOutcome};
pub use traits::IInvocationPredictor;
