use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use cbc_engine::{ProteinPolicy, TriageReport, TriageRequest};
use cbc_standards::StandardsRegistry;

use crate::cli::AnalyzeArgs;
use crate::summary::print_panel;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<TriageReport> {
    let registry = StandardsRegistry::load().context("load standards")?;
    let report_text = read_report(&args.report_file)?;
    debug!(bytes = report_text.len(), "read report text");
    let request = TriageRequest {
        report_text: &report_text,
        query: &args.query,
        weight_kg: args.weight_kg,
        protein: ProteinPolicy {
            grams_per_kg: args.protein_g_per_kg,
        },
    };
    let report = cbc_engine::run(&registry, &request)?;
    Ok(report)
}

pub fn run_panel() -> Result<()> {
    let registry = StandardsRegistry::load().context("load standards")?;
    print_panel(&registry);
    Ok(())
}

/// Read the extracted report text from a file, or stdin when the path is "-".
fn read_report(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read report text from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("read report file: {}", path.display()))
}
