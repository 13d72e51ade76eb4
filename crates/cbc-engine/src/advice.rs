//! Nutrition advice generation.
//!
//! The first line is always a protein-intake recommendation derived from
//! patient weight; every finding then contributes exactly one guidance line,
//! falling back to a consult-your-doctor line when the tables have no entry.

use cbc_model::{AbnormalFinding, Direction, EngineError};
use cbc_standards::StandardsRegistry;

/// Daily protein recommendation policy. The multiplier is a policy constant,
/// not a clinical measurement, so it is configurable rather than hardcoded.
#[derive(Debug, Clone, Copy)]
pub struct ProteinPolicy {
    pub grams_per_kg: f64,
}

impl Default for ProteinPolicy {
    fn default() -> Self {
        Self { grams_per_kg: 1.2 }
    }
}

impl ProteinPolicy {
    /// Daily protein target in grams, rounded to the nearest gram.
    pub fn grams_per_day(&self, weight_kg: f64) -> i64 {
        (weight_kg * self.grams_per_kg).round() as i64
    }
}

/// Generate the nutrition advice block.
///
/// # Errors
///
/// Returns [`EngineError::InvalidWeight`] when `weight_kg` is not a positive
/// finite number. Invalid weight is a caller error, never silently clamped.
pub fn generate_advice(
    registry: &StandardsRegistry,
    policy: ProteinPolicy,
    findings: &[AbnormalFinding],
    weight_kg: f64,
) -> Result<String, EngineError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(EngineError::InvalidWeight { value: weight_kg });
    }

    let mut lines = Vec::with_capacity(findings.len() + 1);
    lines.push(format!(
        "Protein Intake: aim for approximately {} g/day from eggs, dairy, legumes, and lean meats.",
        policy.grams_per_day(weight_kg)
    ));

    for finding in findings {
        let guidance = registry.advice_for(&finding.parameter, finding.direction);
        let line = match (finding.direction, guidance) {
            (Direction::Deficiency, Some(text)) => {
                format!("{} deficiency: Increase intake of {text}.", finding.parameter)
            }
            (Direction::Elevation, Some(text)) => {
                format!(
                    "{} elevation: Dietary changes include {text}.",
                    finding.parameter
                )
            }
            (direction, None) => format!(
                "{} {direction}: Consult your doctor for dietary guidance.",
                finding.parameter
            ),
        };
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(parameter: &str, direction: Direction) -> AbnormalFinding {
        AbnormalFinding {
            parameter: parameter.to_string(),
            direction,
        }
    }

    #[test]
    fn protein_line_rounds_to_nearest_gram() {
        assert_eq!(ProteinPolicy::default().grams_per_day(70.0), 84);
        assert_eq!(ProteinPolicy::default().grams_per_day(71.0), 85);
    }

    #[test]
    fn always_one_line_per_finding_plus_protein() {
        let registry = StandardsRegistry::load().expect("load standards");
        let findings = vec![
            finding("Hemoglobin", Direction::Deficiency),
            finding("Platelet Count", Direction::Elevation),
        ];
        let advice =
            generate_advice(&registry, ProteinPolicy::default(), &findings, 70.0).expect("advice");
        assert_eq!(advice.lines().count(), findings.len() + 1);
    }

    #[test]
    fn deficiency_and_elevation_use_their_tables() {
        let registry = StandardsRegistry::load().expect("load standards");
        let findings = vec![
            finding("Hemoglobin", Direction::Deficiency),
            finding("Hemoglobin", Direction::Elevation),
        ];
        let advice =
            generate_advice(&registry, ProteinPolicy::default(), &findings, 70.0).expect("advice");
        let lines: Vec<&str> = advice.lines().collect();
        assert!(lines[1].starts_with("Hemoglobin deficiency: Increase intake of"));
        assert!(lines[2].starts_with("Hemoglobin elevation: Dietary changes include"));
    }

    #[test]
    fn missing_table_entry_falls_back() {
        let registry = StandardsRegistry::load().expect("load standards");
        let findings = vec![finding("Ferritin", Direction::Elevation)];
        let advice =
            generate_advice(&registry, ProteinPolicy::default(), &findings, 70.0).expect("advice");
        assert_eq!(
            advice.lines().nth(1),
            Some("Ferritin elevation: Consult your doctor for dietary guidance.")
        );
    }

    #[test]
    fn invalid_weight_is_rejected() {
        let registry = StandardsRegistry::load().expect("load standards");
        for weight in [0.0, -70.0, f64::NAN, f64::INFINITY] {
            let result = generate_advice(&registry, ProteinPolicy::default(), &[], weight);
            assert!(matches!(
                result,
                Err(EngineError::InvalidWeight { .. })
            ));
        }
    }

    #[test]
    fn custom_policy_changes_the_target() {
        let policy = ProteinPolicy { grams_per_kg: 1.5 };
        assert_eq!(policy.grams_per_day(70.0), 105);
    }
}
