//! End-to-end engine tests over the embedded standards tables.

use cbc_engine::{
    ALL_NORMAL_VERDICT, NO_ABNORMALITIES, ProteinPolicy, TriageRequest, analyze, build_analysis,
    build_outputs, generate_advice, resolve_links,
};
use cbc_model::{AbnormalFinding, Direction, EngineError, Intent};
use cbc_standards::StandardsRegistry;

const SAMPLE_REPORT: &str = "\
CBC Report
Hemoglobin: 9.5 g/dL
Packed Cell Volume (PCV): 41.2 %
RBC Count: 4.6 million/mm³
MCV: 85.0 fL
MCH 28.1 pg
MCHC 32.5 g/dL
Red Cell Distribution Width (RDW): 13.2 %
Total Leukocyte Count (TLC): 11.5 thou/mm³
Segmented Neutrophils: 65 %
Lymphocytes: 43.1 %
Monocytes: 5.0 %
Eosinophils: 2.1 %
Basophils: 0.5 %
Neutrophils: 2.5 thou/mm³
Lymphocytes: 2.32 thou/mm³
Monocytes: 0.5 thou/mm³
Eosinophils: 0.1 thou/mm³
Basophils: 0.05 thou/mm³
Platelet Count: 320 thou/mm³
Mean Platelet Volume: 10.1 fL
";

fn registry() -> StandardsRegistry {
    StandardsRegistry::load().expect("load standards")
}

#[test]
fn low_hemoglobin_renders_implication() {
    let analysis = build_analysis(&registry(), "Hemoglobin: 9.5");
    assert_eq!(analysis.classifications.len(), 1);
    assert_eq!(
        analysis.summary_lines[0],
        "- Hemoglobin: 9.5 g/dL (Ref: 13.0–17.0 g/dL) → Low (→ suggests anemia)"
    );
    assert_eq!(
        analysis.findings,
        vec![AbnormalFinding {
            parameter: "Hemoglobin".to_string(),
            direction: Direction::Deficiency,
        }]
    );
}

#[test]
fn boundary_value_is_normal() {
    let analysis = build_analysis(&registry(), "Hemoglobin: 13.0");
    assert_eq!(
        analysis.summary_lines[0],
        "- Hemoglobin: 13.0 g/dL (Ref: 13.0–17.0 g/dL) → Normal"
    );
    assert!(analysis.findings.is_empty());
}

#[test]
fn empty_report_yields_all_normal_verdict() {
    let registry = registry();
    let analysis = build_analysis(&registry, "");
    assert!(analysis.classifications.is_empty());
    assert!(analysis.findings.is_empty());
    assert_eq!(analysis.verdict, ALL_NORMAL_VERDICT);
    assert_eq!(analysis.clinical_summary(), ALL_NORMAL_VERDICT);
    assert_eq!(resolve_links(&registry, &analysis.findings), NO_ABNORMALITIES);
}

#[test]
fn garbled_text_yields_zero_readings() {
    let analysis = build_analysis(&registry(), "%%%% scanned page, no legible values 12345");
    assert!(analysis.classifications.is_empty());
}

#[test]
fn full_report_classifies_whole_panel_in_order() {
    let analysis = build_analysis(&registry(), SAMPLE_REPORT);
    assert_eq!(analysis.classifications.len(), 20);

    // Findings keep panel iteration order, not severity or alphabetical order.
    let findings: Vec<(&str, Direction)> = analysis
        .findings
        .iter()
        .map(|finding| (finding.parameter.as_str(), finding.direction))
        .collect();
    assert_eq!(
        findings,
        vec![
            ("Hemoglobin", Direction::Deficiency),
            ("Total Leukocyte Count (TLC)", Direction::Elevation),
            ("Lymphocytes (%)", Direction::Elevation),
        ]
    );
    assert_eq!(
        analysis.verdict,
        "Abnormal results: Hemoglobin → deficiency; \
         Total Leukocyte Count (TLC) → elevation; \
         Lymphocytes (%) → elevation. \
         Please discuss these findings with your physician."
    );
}

#[test]
fn differential_and_absolute_rows_classify_independently() {
    let analysis = build_analysis(&registry(), SAMPLE_REPORT);
    let reading = |name: &str| {
        analysis
            .classifications
            .iter()
            .find(|c| c.parameter == name)
            .unwrap_or_else(|| panic!("missing {name}"))
    };
    assert_eq!(reading("Lymphocytes (%)").value, 43.1);
    assert_eq!(reading("Lymphocytes (abs)").value, 2.32);
    assert_eq!(reading("Neutrophils (abs)").value, 2.5);
}

#[test]
fn summary_is_idempotent() {
    let registry = registry();
    let first = build_analysis(&registry, SAMPLE_REPORT);
    let second = build_analysis(&registry, SAMPLE_REPORT);
    assert_eq!(first.summary_lines, second.summary_lines);
    assert_eq!(first.verdict, second.verdict);
}

#[test]
fn link_and_advice_counts_match_findings() {
    let registry = registry();
    let analysis = build_analysis(&registry, SAMPLE_REPORT);
    let links = resolve_links(&registry, &analysis.findings);
    assert_eq!(links.lines().count(), analysis.findings.len());
    let advice = generate_advice(&registry, ProteinPolicy::default(), &analysis.findings, 70.0)
        .expect("advice");
    assert_eq!(advice.lines().count(), analysis.findings.len() + 1);
}

#[test]
fn unmapped_elevation_gets_fallback_advice() {
    let findings = vec![AbnormalFinding {
        parameter: "Basophils".to_string(),
        direction: Direction::Elevation,
    }];
    let advice =
        generate_advice(&registry(), ProteinPolicy::default(), &findings, 70.0).expect("advice");
    let lines: Vec<&str> = advice.lines().collect();
    assert!(lines[0].contains("84 g/day"));
    assert_eq!(
        lines[1],
        "Basophils elevation: Consult your doctor for dietary guidance."
    );
}

#[test]
fn analyze_routes_summary_query_to_all_sections() {
    let request = TriageRequest {
        report_text: SAMPLE_REPORT,
        query: "Give me a summary of my report",
        weight_kg: 70.0,
        protein: ProteinPolicy::default(),
    };
    let response = analyze(&registry(), &request).expect("analyze");
    assert_eq!(response.intent, Intent::FullReport);
    assert_eq!(response.section_count(), 4);
    let summary = response.clinical_summary.expect("summary section");
    assert!(summary.contains("Hemoglobin: 9.5 g/dL"));
    assert!(summary.ends_with("physician."));
}

#[test]
fn analyze_routes_diet_query_to_nutrition_only() {
    let request = TriageRequest {
        report_text: SAMPLE_REPORT,
        query: "what's a good diet plan",
        weight_kg: 70.0,
        protein: ProteinPolicy::default(),
    };
    let response = analyze(&registry(), &request).expect("analyze");
    assert_eq!(response.intent, Intent::Nutrition);
    assert_eq!(response.section_count(), 1);
    let nutrition = response.nutrition_advice.expect("nutrition section");
    assert!(nutrition.starts_with("Protein Intake:"));
}

#[test]
fn analyze_rejects_invalid_weight() {
    let request = TriageRequest {
        report_text: SAMPLE_REPORT,
        query: "summary",
        weight_kg: -1.0,
        protein: ProteinPolicy::default(),
    };
    let result = analyze(&registry(), &request);
    assert!(matches!(result, Err(EngineError::InvalidWeight { .. })));
}

#[test]
fn exercise_section_is_static() {
    let registry = registry();
    let abnormal = TriageRequest {
        report_text: SAMPLE_REPORT,
        query: "exercise routine please",
        weight_kg: 70.0,
        protein: ProteinPolicy::default(),
    };
    let normal = TriageRequest {
        report_text: "",
        query: "exercise routine please",
        weight_kg: 70.0,
        protein: ProteinPolicy::default(),
    };
    let outputs_abnormal = build_outputs(&registry, &abnormal).expect("outputs");
    let outputs_normal = build_outputs(&registry, &normal).expect("outputs");
    assert_eq!(
        outputs_abnormal.exercise_advice,
        outputs_normal.exercise_advice
    );
}
