#![deny(unsafe_code)]

//! Typed parsers for the embedded CSV tables.

use cbc_model::ParameterSpec;
use serde::Deserialize;

use crate::error::StandardsError;

#[derive(Debug, Deserialize)]
struct PanelRow {
    name: String,
    pattern: String,
    occurrence: usize,
    low: f64,
    high: f64,
    unit: String,
    low_implication: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupRow {
    name: String,
    #[serde(alias = "url", alias = "guidance")]
    value: String,
}

/// Parse the reference-range panel CSV. Row order is the canonical panel
/// iteration order preserved by every downstream list.
pub fn parse_panel_csv(path: &str, contents: &str) -> Result<Vec<ParameterSpec>, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_bytes());
    let mut panel = Vec::new();
    for record in reader.deserialize::<PanelRow>() {
        let row = record.map_err(|e| csv_error(path, &e))?;
        panel.push(ParameterSpec {
            name: row.name,
            pattern: row.pattern,
            occurrence: row.occurrence,
            low: row.low,
            high: row.high,
            unit: row.unit,
            low_implication: row.low_implication.filter(|s| !s.is_empty()),
        });
    }
    Ok(panel)
}

/// Parse a two-column name/value lookup CSV (links or advice tables) into
/// ordered pairs. Key uniqueness is checked by the registry.
pub fn parse_lookup_csv(
    path: &str,
    contents: &str,
) -> Result<Vec<(String, String)>, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_bytes());
    let mut pairs = Vec::new();
    for record in reader.deserialize::<LookupRow>() {
        let row = record.map_err(|e| csv_error(path, &e))?;
        pairs.push((row.name, row.value));
    }
    Ok(pairs)
}

fn csv_error(path: &str, error: &csv::Error) -> StandardsError {
    StandardsError::Csv {
        path: path.to_string(),
        message: error.to_string(),
    }
}
