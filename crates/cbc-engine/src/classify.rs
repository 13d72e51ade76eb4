//! Range classification of extracted readings.

use cbc_model::{Classification, ParameterSpec, Status};

/// Classify a reading against its reference range. Both bounds are
/// inclusive: a value exactly on a bound is Normal.
pub fn classify(value: f64, spec: &ParameterSpec) -> Classification {
    let status = if value < spec.low {
        Status::Low
    } else if value > spec.high {
        Status::High
    } else {
        Status::Normal
    };
    Classification {
        parameter: spec.name.clone(),
        value,
        unit: spec.unit.clone(),
        low: spec.low,
        high: spec.high,
        status,
        low_implication: spec.low_implication.clone(),
    }
}
