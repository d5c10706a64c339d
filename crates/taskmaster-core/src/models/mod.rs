//! Data models shared between the scheduler and the predictor.

pub mod function_request;
pub mod update_outcome;

pub use function_request::FunctionRequest;
pub use update_outcome::UpdateOutcome;
