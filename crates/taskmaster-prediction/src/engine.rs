//! InvocationPredictor: validates events, drives the history, serves predictions.
//!
//! Implements `IInvocationPredictor` from taskmaster-core.

use std::path::Path;

use taskmaster_core::errors::{PredictorError, PredictorResult};
use taskmaster_core::traits::IInvocationPredictor;
use taskmaster_core::{FunctionRequest, PredictorConfig, UpdateOutcome};
use tracing::{debug, info, trace, warn};

use crate::history::{History, TrackedEntry};
use crate::stats::{PredictorStats, StatsRecorder};

/// Predicts the next invocation as the anchor of an anchor-preserving
/// bounded history of distinct function names.
///
/// Single owner: wrap it in a [`SharedPredictor`](crate::SharedPredictor)
/// when several workers feed the same scheduling loop.
#[derive(Debug)]
pub struct InvocationPredictor {
    history: History,
    stats: StatsRecorder,
}

impl InvocationPredictor {
    /// Build a predictor from a resolved config.
    /// Fails with a config error if the capacity is missing or zero.
    pub fn new(config: &PredictorConfig) -> PredictorResult<Self> {
        let capacity = config.effective_capacity()?;
        info!(capacity, "invocation predictor created");
        Ok(Self {
            history: History::new(capacity),
            stats: StatsRecorder::default(),
        })
    }

    /// Build a predictor with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> PredictorResult<Self> {
        Self::new(&PredictorConfig::with_capacity(capacity))
    }

    /// Build a predictor from a standalone predictor config file (TOML or YAML).
    pub fn from_config_file(path: &Path) -> PredictorResult<Self> {
        let config = PredictorConfig::load_file(path)?;
        Self::new(&config)
    }

    /// Ingest one observed invocation.
    ///
    /// Rejects an empty function name without touching the history.
    pub fn update(&mut self, request: FunctionRequest) -> PredictorResult<UpdateOutcome> {
        if request.fn_name.is_empty() {
            self.stats.record_rejected();
            warn!("rejected invocation with empty function name");
            return Err(PredictorError::InvalidRequest {
                reason: "function name must not be empty".to_string(),
            });
        }

        let fn_name = request.fn_name.clone();
        let outcome = self.history.observe(request);
        self.stats.record_update(&outcome);

        match &outcome {
            UpdateOutcome::Refreshed => {
                debug!(fn_name = %fn_name, "refreshed tracked function");
            }
            UpdateOutcome::Admitted => {
                debug!(
                    fn_name = %fn_name,
                    history_len = self.history.len(),
                    "admitted function"
                );
            }
            UpdateOutcome::Rotated { evicted } => {
                debug!(fn_name = %fn_name, evicted = %evicted, "rotated tail slot");
            }
        }

        Ok(outcome)
    }

    /// The request stored at the anchor of the history.
    pub fn predict(&self) -> PredictorResult<FunctionRequest> {
        match self.history.head() {
            Some(anchor) => {
                self.stats.record_prediction(true);
                trace!(fn_name = %anchor.fn_name(), "predicted next invocation");
                Ok(anchor.request().clone())
            }
            None => {
                self.stats.record_prediction(false);
                Err(PredictorError::NoPrediction)
            }
        }
    }

    /// Forget every tracked function. Capacity and counters are kept.
    pub fn reset(&mut self) {
        info!(dropped = self.history.len(), "invocation predictor reset");
        self.history.clear();
    }

    pub fn capacity(&self) -> usize {
        self.history.capacity()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.history.is_full()
    }

    pub fn contains(&self, fn_name: &str) -> bool {
        self.history.contains(fn_name)
    }

    /// Tracked names, anchor first.
    pub fn function_names(&self) -> Vec<String> {
        self.history.function_names()
    }

    pub fn entries(&self) -> &[TrackedEntry] {
        self.history.entries()
    }

    pub fn anchor(&self) -> Option<&TrackedEntry> {
        self.history.head()
    }

    pub fn tail(&self) -> Option<&TrackedEntry> {
        self.history.tail()
    }

    /// Borrow the underlying history.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn stats(&self) -> PredictorStats {
        self.stats.snapshot()
    }
}

impl IInvocationPredictor for InvocationPredictor {
    fn update(&mut self, request: FunctionRequest) -> PredictorResult<UpdateOutcome> {
        InvocationPredictor::update(self, request)
    }

    fn predict(&self) -> PredictorResult<FunctionRequest> {
        InvocationPredictor::predict(self)
    }
}
