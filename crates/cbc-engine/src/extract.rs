//! Value extraction from raw report text.
//!
//! Lab printouts are semi-structured: a parameter label followed by optional
//! separator punctuation and the measured value. The extractor searches for
//! each panel label case-insensitively and takes the numeric token that
//! follows it. A parameter that never appears is silently skipped; truncated
//! or garbled text is expected input, never an error.

use cbc_model::ParameterSpec;
use regex::RegexBuilder;

/// Extract the value for one panel parameter from raw report text.
///
/// Labels are tried in the spec's declared order and the first label that
/// yields enough matches wins. The spec's `occurrence` selects the Nth
/// parseable match of the label, which is how differential-percentage and
/// absolute-count rows sharing a printed label are told apart.
pub fn extract_value(text: &str, spec: &ParameterSpec) -> Option<f64> {
    spec.labels()
        .find_map(|label| extract_label(text, label, spec.occurrence))
}

fn extract_label(text: &str, label: &str, occurrence: usize) -> Option<f64> {
    // Labels contain parentheses, e.g. "Packed Cell Volume (PCV)"; escape so
    // they match literally instead of grouping.
    let pattern = format!(r"{}\s*[:\-]?\s*([\d.]+)", regex::escape(label));
    let matcher = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()?;
    matcher
        .captures_iter(text)
        .filter_map(|captures| captures.get(1)?.as_str().parse::<f64>().ok())
        .nth(occurrence - 1)
}
