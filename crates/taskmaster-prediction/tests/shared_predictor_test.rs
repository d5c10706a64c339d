use std::thread;

use taskmaster_core::errors::PredictorError;
use taskmaster_core::traits::IInvocationPredictor;
use taskmaster_core::{FunctionRequest, PredictorConfig};
use taskmaster_prediction::SharedPredictor;

#[test]
fn clones_share_one_history() {
    let shared = SharedPredictor::from_config(&PredictorConfig::with_capacity(2)).unwrap();
    let other = shared.clone();

    shared.update(FunctionRequest::new("a")).unwrap();
    other.update(FunctionRequest::new("b")).unwrap();
    shared.update(FunctionRequest::new("c")).unwrap();

    assert_eq!(other.function_names().unwrap(), vec!["a", "c"]);
    assert_eq!(other.predict().unwrap().fn_name, "a");
}

#[test]
fn concurrent_workers_never_exceed_capacity() {
    let shared = SharedPredictor::from_config(&PredictorConfig::with_capacity(3)).unwrap();
    shared.update(FunctionRequest::new("anchor")).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    let name = format!("fn-{worker}-{}", i % 7);
                    shared.update(FunctionRequest::new(name)).unwrap();
                    let prediction = shared.predict().unwrap();
                    assert_eq!(prediction.fn_name, "anchor");
                    assert!(shared.len().unwrap() <= 3);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = shared.stats().unwrap();
    assert_eq!(stats.updates, 1 + 8 * 200);
    assert_eq!(shared.len().unwrap(), 3);
    assert_eq!(shared.function_names().unwrap()[0], "anchor");
}

#[test]
fn reconfigure_rebuilds_empty_predictor() {
    let shared = SharedPredictor::from_config(&PredictorConfig::with_capacity(2)).unwrap();
    shared.update(FunctionRequest::new("a")).unwrap();

    shared
        .reconfigure(&PredictorConfig::with_capacity(4))
        .unwrap();
    assert_eq!(shared.capacity().unwrap(), 4);
    assert!(shared.is_empty().unwrap());
    assert!(matches!(shared.predict(), Err(PredictorError::NoPrediction)));
}

#[test]
fn invalid_reconfigure_keeps_current_predictor() {
    let shared = SharedPredictor::from_config(&PredictorConfig::with_capacity(2)).unwrap();
    shared.update(FunctionRequest::new("a")).unwrap();

    let err = shared
        .reconfigure(&PredictorConfig::with_capacity(0))
        .unwrap_err();
    assert!(matches!(err, PredictorError::Config(_)));
    assert_eq!(shared.capacity().unwrap(), 2);
    assert_eq!(shared.function_names().unwrap(), vec!["a"]);
}

#[test]
fn reset_through_handle() {
    let shared = SharedPredictor::from_config(&PredictorConfig::with_capacity(2)).unwrap();
    shared.update(FunctionRequest::new("a")).unwrap();
    shared.reset().unwrap();
    assert!(shared.is_empty().unwrap());
}

#[test]
fn poisoned_lock_is_reported() {
    let shared = SharedPredictor::from_config(&PredictorConfig::with_capacity(2)).unwrap();
    let poisoner = shared.clone();
    let _ = thread::spawn(move || {
        poisoner
            .read(|_| panic!("poison the predictor lock"))
            .unwrap();
    })
    .join();

    assert!(matches!(
        shared.update(FunctionRequest::new("a")),
        Err(PredictorError::LockPoisoned)
    ));
}

#[test]
fn handle_implements_predictor_trait() {
    let mut handle: Box<dyn IInvocationPredictor> = Box::new(
        SharedPredictor::from_config(&PredictorConfig::with_capacity(2)).unwrap(),
    );
    handle.update(FunctionRequest::new("a")).unwrap();
    assert_eq!(handle.predict().unwrap().fn_name, "a");
}
