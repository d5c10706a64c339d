//! TaskmasterErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so the scheduler can branch on a
/// stable code string instead of matching on display text.
pub trait TaskmasterErrorCode {
    /// Returns the error code string (e.g., "NO_PREDICTION").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const NO_PREDICTION: &str = "NO_PREDICTION";
pub const LOCK_POISONED: &str = "LOCK_POISONED";
