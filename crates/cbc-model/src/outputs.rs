use serde::{Deserialize, Serialize};

/// The four generated text blocks, before intent filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageOutputs {
    pub clinical_summary: String,
    pub reference_links: String,
    pub nutrition_advice: String,
    pub exercise_advice: String,
}

/// Query intent category. Every query maps to exactly one category; matching
/// is evaluated in declaration order and the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Full-report request: all four sections.
    FullReport,
    /// Range / deficiency / elevation question: summary + links.
    RangeQuestion,
    /// Diet or meal-plan question: nutrition only.
    Nutrition,
    /// Workout or routine question: exercise only.
    Exercise,
}

/// The subset of sections selected for the caller's query. Sections the
/// intent router filtered out are `None` and omitted from serialized output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageResponse {
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinical_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_links: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition_advice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_advice: Option<String>,
}

impl TriageResponse {
    /// Number of sections present in the response. Always at least one: the
    /// router is total and every intent selects a non-empty subset.
    pub fn section_count(&self) -> usize {
        [
            self.clinical_summary.is_some(),
            self.reference_links.is_some(),
            self.nutrition_advice.is_some(),
            self.exercise_advice.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}
