//! # taskmaster-prediction
//!
//! Next-invocation prediction for the Taskmaster scheduler.
//!
//! The predictor keeps a bounded history of distinct function names in
//! first-arrival order. When the history is full, a new name replaces only
//! the most recently admitted entry, so the first `capacity - 1` names form a
//! fixed anchor prefix. `predict` returns the request stored at the head:
//! workloads that loop are expected to come back to the function that
//! started the sequence.
//!
//! | Capacity 2, events `a`, `b`, `c` | History |
//! |----------------------------------|---------|
//! | after `a` | `[a]` |
//! | after `b` | `[a, b]` |
//! | after `c` | `[a, c]` (`b` rotated out) |
//!
//! `predict()` then returns `a`.

pub mod engine;
pub mod history;
pub mod shared;
pub mod stats;

pub use engine::InvocationPredictor;
pub use history::{History, TrackedEntry};
pub use shared::SharedPredictor;
pub use stats::PredictorStats;
