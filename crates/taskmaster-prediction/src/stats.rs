//! Counters describing how a predictor has been driven.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use taskmaster_core::UpdateOutcome;

/// Point-in-time snapshot of predictor counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictorStats {
    /// Accepted updates.
    pub updates: u64,
    /// Updates that refreshed an already tracked name.
    pub refreshes: u64,
    /// Updates that appended a new name below capacity.
    pub admissions: u64,
    /// Updates that replaced the tail of a full history.
    pub rotations: u64,
    /// Updates rejected as invalid.
    pub rejected: u64,
    /// Predictions served.
    pub predictions: u64,
    /// Predictions requested while the history was empty.
    pub misses: u64,
}

impl PredictorStats {
    /// Fraction of prediction requests that produced a prediction.
    pub fn prediction_rate(&self) -> f64 {
        let total = self.predictions + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.predictions as f64 / total as f64
    }
}

/// Live counters. Update counters are bumped through `&mut`, prediction
/// counters through `&self` since `predict` never takes the predictor mutably.
#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    updates: u64,
    refreshes: u64,
    admissions: u64,
    rotations: u64,
    rejected: u64,
    predictions: AtomicU64,
    misses: AtomicU64,
}

impl StatsRecorder {
    pub(crate) fn record_update(&mut self, outcome: &UpdateOutcome) {
        self.updates += 1;
        match outcome {
            UpdateOutcome::Refreshed => self.refreshes += 1,
            UpdateOutcome::Admitted => self.admissions += 1,
            UpdateOutcome::Rotated { .. } => self.rotations += 1,
        }
    }

    pub(crate) fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    pub(crate) fn record_prediction(&self, served: bool) {
        let counter = if served { &self.predictions } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> PredictorStats {
        PredictorStats {
            updates: self.updates,
            refreshes: self.refreshes,
            admissions: self.admissions,
            rotations: self.rotations,
            rejected: self.rejected,
            predictions: self.predictions.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
