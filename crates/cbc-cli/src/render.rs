//! Plain-text rendering of a triage response.
//!
//! This is the canonical text output contract: every selected section is
//! printed under a fixed header, in a fixed order, exactly as generated by
//! the engine.

use cbc_model::TriageResponse;

/// Render the selected sections as plain text. Filtered-out sections are
/// omitted entirely; the router guarantees at least one section is present.
pub fn render_sections(response: &TriageResponse) -> String {
    let mut sections = Vec::new();
    if let Some(summary) = &response.clinical_summary {
        sections.push(format!("Clinical Summary:\n{summary}"));
    }
    if let Some(links) = &response.reference_links {
        sections.push(format!("Reference Links:\n{links}"));
    }
    if let Some(nutrition) = &response.nutrition_advice {
        sections.push(format!("Nutrition Advice:\n{nutrition}"));
    }
    if let Some(exercise) = &response.exercise_advice {
        sections.push(format!("Exercise Advice:\n{exercise}"));
    }
    let mut text = sections.join("\n\n");
    text.push('\n');
    text
}
