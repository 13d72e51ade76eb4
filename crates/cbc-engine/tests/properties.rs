//! Property tests for the classifier and the intent router.

use cbc_engine::{classify, select};
use cbc_model::{ParameterSpec, Status, TriageOutputs};
use proptest::prelude::*;

fn spec(low: f64, high: f64) -> ParameterSpec {
    ParameterSpec {
        name: "Hemoglobin".to_string(),
        pattern: "Hemoglobin".to_string(),
        occurrence: 1,
        low,
        high,
        unit: "g/dL".to_string(),
        low_implication: None,
    }
}

fn outputs() -> TriageOutputs {
    TriageOutputs {
        clinical_summary: "summary".to_string(),
        reference_links: "links".to_string(),
        nutrition_advice: "nutrition".to_string(),
        exercise_advice: "exercise".to_string(),
    }
}

proptest! {
    #[test]
    fn status_is_a_pure_function_of_value_and_bounds(
        value in -1.0e6f64..1.0e6,
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let classification = classify(value, &spec(low, high));
        let expected = if value < low {
            Status::Low
        } else if value > high {
            Status::High
        } else {
            Status::Normal
        };
        prop_assert_eq!(classification.status, expected);
    }

    #[test]
    fn bounds_are_always_normal(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_eq!(classify(low, &spec(low, high)).status, Status::Normal);
        prop_assert_eq!(classify(high, &spec(low, high)).status, Status::Normal);
    }

    #[test]
    fn router_is_total(query in ".{1,80}") {
        let response = select(&query, &outputs());
        prop_assert!(response.section_count() >= 1);
    }
}
