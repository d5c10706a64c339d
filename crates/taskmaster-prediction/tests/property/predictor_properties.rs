use proptest::prelude::*;
use taskmaster_core::FunctionRequest;
use taskmaster_prediction::InvocationPredictor;

/// Names drawn from a small alphabet so streams revisit names often.
fn name_stream() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-h]", 0..64)
}

/// Distinct names in first-arrival order.
fn distinct_in_order(names: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for name in names {
        if !seen.contains(name) {
            seen.push(name.clone());
        }
    }
    seen
}

proptest! {
    #[test]
    fn length_never_exceeds_capacity(capacity in 1usize..6, names in name_stream()) {
        let mut predictor = InvocationPredictor::with_capacity(capacity).unwrap();
        for name in &names {
            predictor.update(FunctionRequest::new(name.as_str())).unwrap();
            prop_assert!(predictor.len() <= capacity);
        }
    }

    #[test]
    fn names_stay_unique(capacity in 1usize..6, names in name_stream()) {
        let mut predictor = InvocationPredictor::with_capacity(capacity).unwrap();
        for name in &names {
            predictor.update(FunctionRequest::new(name.as_str())).unwrap();
        }
        let tracked = predictor.function_names();
        let mut deduped = tracked.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), tracked.len());
    }

    #[test]
    fn first_names_form_a_fixed_anchor_prefix(capacity in 2usize..6, names in name_stream()) {
        let mut predictor = InvocationPredictor::with_capacity(capacity).unwrap();
        for name in &names {
            predictor.update(FunctionRequest::new(name.as_str())).unwrap();
        }
        let anchors: Vec<String> = distinct_in_order(&names)
            .into_iter()
            .take(capacity - 1)
            .collect();
        let tracked = predictor.function_names();
        prop_assert_eq!(&tracked[..anchors.len()], &anchors[..]);

        if let Some(first) = anchors.first() {
            prop_assert_eq!(&predictor.predict().unwrap().fn_name, first);
        }
    }

    #[test]
    fn rotation_only_touches_the_tail(capacity in 1usize..6, names in name_stream(), next in "[i-p]") {
        let mut predictor = InvocationPredictor::with_capacity(capacity).unwrap();
        for name in &names {
            predictor.update(FunctionRequest::new(name.as_str())).unwrap();
        }
        let before = predictor.function_names();
        predictor.update(FunctionRequest::new(next.as_str())).unwrap();
        let after = predictor.function_names();

        if before.len() == capacity {
            prop_assert_eq!(after.len(), capacity);
            prop_assert_eq!(&after[..capacity - 1], &before[..capacity - 1]);
        } else {
            prop_assert_eq!(&after[..before.len()], &before[..]);
            prop_assert_eq!(after.len(), before.len() + 1);
        }
        prop_assert_eq!(after.last().unwrap(), &next);
    }

    #[test]
    fn refresh_never_changes_order(capacity in 1usize..6, names in name_stream(), values in prop::collection::vec("[0-9]{1,3}", 1..8)) {
        let mut predictor = InvocationPredictor::with_capacity(capacity).unwrap();
        for name in &names {
            predictor.update(FunctionRequest::new(name.as_str())).unwrap();
        }
        let before = predictor.function_names();
        if let Some(target) = before.last().cloned() {
            for value in &values {
                predictor
                    .update(FunctionRequest::new(target.as_str()).with_parameter("p1", value.as_str()))
                    .unwrap();
            }
            prop_assert_eq!(predictor.function_names(), before);
            let stored = predictor.tail().unwrap().request().parameter("p1").map(str::to_string);
            prop_assert_eq!(stored, values.last().cloned());
        }
    }

    #[test]
    fn predict_is_deterministic(capacity in 1usize..6, names in name_stream()) {
        let mut predictor = InvocationPredictor::with_capacity(capacity).unwrap();
        for name in &names {
            predictor.update(FunctionRequest::new(name.as_str())).unwrap();
        }
        match (predictor.predict(), predictor.predict()) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => prop_assert!(names.is_empty()),
            _ => prop_assert!(false, "predict disagreed with itself"),
        }
    }
}
