//! SharedPredictor: one predictor, many scheduler workers, one lock.

use std::sync::{Arc, Mutex, MutexGuard};

use taskmaster_core::errors::{PredictorError, PredictorResult};
use taskmaster_core::traits::IInvocationPredictor;
use taskmaster_core::{FunctionRequest, PredictorConfig, UpdateOutcome};
use tracing::info;

use crate::engine::InvocationPredictor;
use crate::stats::PredictorStats;

/// Cloneable handle serializing every operation on one predictor through a
/// single mutex, so a reader never sees a half-applied tail rotation.
#[derive(Debug, Clone)]
pub struct SharedPredictor {
    inner: Arc<Mutex<InvocationPredictor>>,
}

impl SharedPredictor {
    /// Wrap an existing predictor.
    pub fn new(predictor: InvocationPredictor) -> Self {
        Self {
            inner: Arc::new(Mutex::new(predictor)),
        }
    }

    /// Build the wrapped predictor from config.
    pub fn from_config(config: &PredictorConfig) -> PredictorResult<Self> {
        Ok(Self::new(InvocationPredictor::new(config)?))
    }

    fn lock(&self) -> PredictorResult<MutexGuard<'_, InvocationPredictor>> {
        self.inner.lock().map_err(|_| PredictorError::LockPoisoned)
    }

    pub fn update(&self, request: FunctionRequest) -> PredictorResult<UpdateOutcome> {
        self.lock()?.update(request)
    }

    pub fn predict(&self) -> PredictorResult<FunctionRequest> {
        self.lock()?.predict()
    }

    pub fn reset(&self) -> PredictorResult<()> {
        self.lock()?.reset();
        Ok(())
    }

    /// Replace the predictor with one built from `config`, under the lock.
    ///
    /// The new predictor starts empty. If `config` is invalid the current
    /// predictor is left untouched.
    pub fn reconfigure(&self, config: &PredictorConfig) -> PredictorResult<()> {
        let rebuilt = InvocationPredictor::new(config)?;
        let mut guard = self.lock()?;
        info!(
            old_capacity = guard.capacity(),
            new_capacity = rebuilt.capacity(),
            "invocation predictor reconfigured"
        );
        *guard = rebuilt;
        Ok(())
    }

    /// Run `f` against the predictor while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&InvocationPredictor) -> R) -> PredictorResult<R> {
        let guard = self.lock()?;
        Ok(f(&*guard))
    }

    pub fn len(&self) -> PredictorResult<usize> {
        self.read(InvocationPredictor::len)
    }

    pub fn is_empty(&self) -> PredictorResult<bool> {
        self.read(InvocationPredictor::is_empty)
    }

    pub fn capacity(&self) -> PredictorResult<usize> {
        self.read(InvocationPredictor::capacity)
    }

    pub fn function_names(&self) -> PredictorResult<Vec<String>> {
        self.read(InvocationPredictor::function_names)
    }

    pub fn stats(&self) -> PredictorResult<PredictorStats> {
        self.read(InvocationPredictor::stats)
    }
}

impl IInvocationPredictor for SharedPredictor {
    fn update(&mut self, request: FunctionRequest) -> PredictorResult<UpdateOutcome> {
        SharedPredictor::update(self, request)
    }

    fn predict(&self) -> PredictorResult<FunctionRequest> {
        SharedPredictor::predict(self)
    }
}
