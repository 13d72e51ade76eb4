//! Query intent routing.
//!
//! Case-insensitive keyword containment, evaluated in fixed priority order;
//! the first matching category wins and categories are never combined. The
//! router is total: a query matching nothing falls back to the clinical
//! summary plus reference links, so every query yields a non-empty subset.

use cbc_model::{Intent, TriageOutputs, TriageResponse};
use tracing::debug;

const FULL_REPORT_KEYWORDS: &[&str] =
    &["summary", "summarise", "summarize", "overview", "all results", "full report"];

const RANGE_KEYWORDS: &[&str] = &[
    "range",
    "reference",
    "why my hb",
    "hemoglobin",
    "low",
    "high",
    "elevation",
    "deficiency",
    "abnormal",
];

const NUTRITION_KEYWORDS: &[&str] = &["nutrition", "meal", "diet", "nutrient", "food plan"];

const EXERCISE_KEYWORDS: &[&str] = &["exercise", "workout", "routine", "physical activity"];

/// Match a query to an intent category, or `None` when no keyword hits.
pub fn route(query: &str) -> Option<Intent> {
    let query = query.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|keyword| query.contains(keyword));

    if contains_any(FULL_REPORT_KEYWORDS) {
        Some(Intent::FullReport)
    } else if contains_any(RANGE_KEYWORDS) {
        Some(Intent::RangeQuestion)
    } else if contains_any(NUTRITION_KEYWORDS) {
        Some(Intent::Nutrition)
    } else if contains_any(EXERCISE_KEYWORDS) {
        Some(Intent::Exercise)
    } else {
        None
    }
}

/// Select the output subset for a query. Unmatched queries take the same
/// subset as range questions (clinical summary + reference links).
pub fn select(query: &str, outputs: &TriageOutputs) -> TriageResponse {
    let intent = route(query).unwrap_or(Intent::RangeQuestion);
    debug!(?intent, "routed query");
    match intent {
        Intent::FullReport => TriageResponse {
            intent,
            clinical_summary: Some(outputs.clinical_summary.clone()),
            reference_links: Some(outputs.reference_links.clone()),
            nutrition_advice: Some(outputs.nutrition_advice.clone()),
            exercise_advice: Some(outputs.exercise_advice.clone()),
        },
        Intent::RangeQuestion => TriageResponse {
            intent,
            clinical_summary: Some(outputs.clinical_summary.clone()),
            reference_links: Some(outputs.reference_links.clone()),
            nutrition_advice: None,
            exercise_advice: None,
        },
        Intent::Nutrition => TriageResponse {
            intent,
            clinical_summary: None,
            reference_links: None,
            nutrition_advice: Some(outputs.nutrition_advice.clone()),
            exercise_advice: None,
        },
        Intent::Exercise => TriageResponse {
            intent,
            clinical_summary: None,
            reference_links: None,
            nutrition_advice: None,
            exercise_advice: Some(outputs.exercise_advice.clone()),
        },
    }
}
