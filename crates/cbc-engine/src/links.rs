//! Reference-link resolution for abnormal findings.

use cbc_model::AbnormalFinding;
use cbc_standards::StandardsRegistry;

/// Rendered when the findings list is empty.
pub const NO_ABNORMALITIES: &str = "No abnormalities found.";

/// Placeholder URL text for findings with no mapped link.
const NO_URL_DEFINED: &str = "No URL defined";

/// Render one `name: url` line per finding, in input order. A finding whose
/// name has no mapped URL still produces a line with a placeholder, so the
/// output always has exactly one line per finding. An empty findings list
/// renders a fixed sentence rather than an empty string.
pub fn resolve_links(registry: &StandardsRegistry, findings: &[AbnormalFinding]) -> String {
    if findings.is_empty() {
        return NO_ABNORMALITIES.to_string();
    }
    let lines: Vec<String> = findings
        .iter()
        .map(|finding| {
            let url = registry
                .link_for(&finding.parameter)
                .unwrap_or(NO_URL_DEFINED);
            format!("{}: {}", finding.parameter, url)
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use cbc_model::Direction;

    use super::*;

    fn finding(parameter: &str, direction: Direction) -> AbnormalFinding {
        AbnormalFinding {
            parameter: parameter.to_string(),
            direction,
        }
    }

    #[test]
    fn empty_findings_render_fixed_sentence() {
        let registry = StandardsRegistry::load().expect("load standards");
        assert_eq!(resolve_links(&registry, &[]), NO_ABNORMALITIES);
    }

    #[test]
    fn one_line_per_finding_in_input_order() {
        let registry = StandardsRegistry::load().expect("load standards");
        let findings = vec![
            finding("Platelet Count", Direction::Deficiency),
            finding("Hemoglobin", Direction::Deficiency),
        ];
        let output = resolve_links(&registry, &findings);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), findings.len());
        assert!(lines[0].starts_with("Platelet Count: https://"));
        assert!(lines[1].starts_with("Hemoglobin: https://"));
    }

    #[test]
    fn unmapped_name_gets_placeholder_line() {
        let registry = StandardsRegistry::load().expect("load standards");
        let findings = vec![finding("Ferritin", Direction::Elevation)];
        assert_eq!(
            resolve_links(&registry, &findings),
            "Ferritin: No URL defined"
        );
    }
}
