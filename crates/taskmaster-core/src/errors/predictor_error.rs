//! Predictor errors.

use super::error_code::{self, TaskmasterErrorCode};
use super::ConfigError;

/// Errors surfaced by predictor construction, `update` and `predict`.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("no prediction available: history is empty")]
    NoPrediction,

    #[error("predictor lock poisoned")]
    LockPoisoned,
}

impl TaskmasterErrorCode for PredictorError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::InvalidRequest { .. } => error_code::INVALID_REQUEST,
            Self::NoPrediction => error_code::NO_PREDICTION,
            Self::LockPoisoned => error_code::LOCK_POISONED,
        }
    }
}

pub type PredictorResult<T> = Result<T, PredictorError>;
