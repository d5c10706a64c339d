use crate::errors::PredictorResult;
use crate::models::{FunctionRequest, UpdateOutcome};

/// Seam between the scheduler and a next-invocation predictor.
///
/// The scheduler calls `update` once per observed invocation and `predict`
/// whenever it wants a pre-warming hint.
pub trait IInvocationPredictor {
    /// Ingest one observed invocation.
    fn update(&mut self, request: FunctionRequest) -> PredictorResult<UpdateOutcome>;

    /// The invocation expected to run next. Never mutates history.
    fn predict(&self) -> PredictorResult<FunctionRequest>;
}
