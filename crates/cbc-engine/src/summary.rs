//! Clinical summary rendering.
//!
//! Builds the per-reading line list and the one-line verdict from the
//! classification sequence. The arrow-separated `name → direction` form
//! appears only here, at render time; between components abnormalities
//! travel as typed [`AbnormalFinding`] pairs.

use cbc_model::{AbnormalFinding, Classification, ReportAnalysis, Status};
use cbc_standards::StandardsRegistry;
use tracing::debug;

use crate::classify::classify;
use crate::extract::extract_value;

/// Verdict used when every extracted reading is within range.
pub const ALL_NORMAL_VERDICT: &str = "All values are within normal ranges.";

/// Referral sentence appended to an abnormal verdict.
const REFERRAL_SUFFIX: &str = "Please discuss these findings with your physician.";

/// Run extraction and classification over the full panel and render the
/// summary. Parameters absent from the text are omitted entirely; the
/// remaining classifications keep panel iteration order.
pub fn build_analysis(registry: &StandardsRegistry, report_text: &str) -> ReportAnalysis {
    let mut classifications = Vec::new();
    let mut findings = Vec::new();
    let mut summary_lines = Vec::new();

    for spec in registry.panel() {
        let Some(value) = extract_value(report_text, spec) else {
            continue;
        };
        let classification = classify(value, spec);
        if let Some(direction) = classification.direction() {
            findings.push(AbnormalFinding {
                parameter: classification.parameter.clone(),
                direction,
            });
        }
        summary_lines.push(render_line(&classification));
        classifications.push(classification);
    }

    debug!(
        readings = classifications.len(),
        abnormal = findings.len(),
        "classified report"
    );

    let verdict = render_verdict(&findings);
    ReportAnalysis {
        classifications,
        findings,
        summary_lines,
        verdict,
    }
}

fn render_line(classification: &Classification) -> String {
    let mut line = format!(
        "- {}: {} {} (Ref: {}–{} {}) → {}",
        classification.parameter,
        fmt_number(classification.value),
        classification.unit,
        fmt_number(classification.low),
        fmt_number(classification.high),
        classification.unit,
        classification.status,
    );
    if classification.status == Status::Low {
        if let Some(implication) = &classification.low_implication {
            line.push_str(&format!(" (→ suggests {implication})"));
        }
    }
    line
}

fn render_verdict(findings: &[AbnormalFinding]) -> String {
    if findings.is_empty() {
        return ALL_NORMAL_VERDICT.to_string();
    }
    let pairs: Vec<String> = findings
        .iter()
        .map(|finding| format!("{} → {}", finding.parameter, finding.direction))
        .collect();
    format!(
        "Abnormal results: {}. {REFERRAL_SUFFIX}",
        pairs.join("; ")
    )
}

/// Render a reading or bound the way it appears on a lab printout: whole
/// numbers keep one decimal place ("13.0"), everything else prints as-is.
fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_keep_one_decimal() {
        assert_eq!(fmt_number(13.0), "13.0");
        assert_eq!(fmt_number(150.0), "150.0");
    }

    #[test]
    fn fractional_numbers_print_as_is() {
        assert_eq!(fmt_number(9.5), "9.5");
        assert_eq!(fmt_number(0.02), "0.02");
        assert_eq!(fmt_number(11.6), "11.6");
    }
}
