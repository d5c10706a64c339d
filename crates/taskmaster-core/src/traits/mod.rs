pub mod predictor;

pub use predictor::IInvocationPredictor;
