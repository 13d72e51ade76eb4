//! End-to-end report triage.
//!
//! Wires the extractor, classifier, summary builder, link resolver, advice
//! generator, and intent router into one entry point. Everything here is
//! pure computation over the caller's request and the shared read-only
//! registry, so concurrent requests need no synchronization.

use cbc_model::{EngineError, ReportAnalysis, TriageOutputs, TriageResponse};
use cbc_standards::StandardsRegistry;
use tracing::{info, info_span};

use crate::advice::{ProteinPolicy, generate_advice};
use crate::intent::select;
use crate::links::resolve_links;
use crate::summary::build_analysis;

/// One triage request: the extracted report text, the patient's free-text
/// query, and their weight for the protein recommendation.
#[derive(Debug, Clone)]
pub struct TriageRequest<'a> {
    /// Report text produced by the external PDF-extraction collaborator.
    /// Empty or garbled text yields zero readings, not an error.
    pub report_text: &'a str,
    pub query: &'a str,
    pub weight_kg: f64,
    pub protein: ProteinPolicy,
}

/// Everything produced by one triage run: the classified analysis, all four
/// generated sections, and the query-filtered response.
#[derive(Debug, Clone)]
pub struct TriageReport {
    pub analysis: ReportAnalysis,
    pub outputs: TriageOutputs,
    pub response: TriageResponse,
}

/// Build all four output sections from a report.
///
/// # Errors
///
/// Fails only on an invalid patient weight; every other miss (absent
/// parameter, unmapped table key) resolves to a fallback value.
pub fn build_outputs(
    registry: &StandardsRegistry,
    request: &TriageRequest<'_>,
) -> Result<TriageOutputs, EngineError> {
    run(registry, request).map(|report| report.outputs)
}

/// Run the full triage pipeline, keeping the intermediate analysis for
/// callers that render the classification table.
pub fn run(
    registry: &StandardsRegistry,
    request: &TriageRequest<'_>,
) -> Result<TriageReport, EngineError> {
    let span = info_span!("analyze", weight_kg = request.weight_kg);
    let _guard = span.enter();
    let analysis = build_analysis(registry, request.report_text);
    let reference_links = resolve_links(registry, &analysis.findings);
    let nutrition_advice = generate_advice(
        registry,
        request.protein,
        &analysis.findings,
        request.weight_kg,
    )?;
    info!(
        readings = analysis.classifications.len(),
        abnormal = analysis.findings.len(),
        "report analyzed"
    );
    let outputs = TriageOutputs {
        clinical_summary: analysis.clinical_summary(),
        reference_links,
        nutrition_advice,
        exercise_advice: registry.exercise_plan().to_string(),
    };
    let response = select(request.query, &outputs);
    Ok(TriageReport {
        analysis,
        outputs,
        response,
    })
}

/// Run the full triage pipeline and return only the filtered response.
pub fn analyze(
    registry: &StandardsRegistry,
    request: &TriageRequest<'_>,
) -> Result<TriageResponse, EngineError> {
    run(registry, request).map(|report| report.response)
}
