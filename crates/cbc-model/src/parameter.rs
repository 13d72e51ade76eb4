use serde::{Deserialize, Serialize};

/// One entry of the fixed CBC panel: the canonical parameter name, the text
/// label(s) it appears under on a lab printout, and its reference range.
///
/// The canonical `name` is the single authoritative spelling used as the join
/// key across every static table (reference ranges, links, advice). Labels
/// that appear twice on a CBC printout (differential percentages vs absolute
/// counts) are given distinct canonical names and disambiguated by match
/// occurrence, so no two panel entries share a key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Canonical parameter name, e.g. "Lymphocytes (%)".
    pub name: String,
    /// Pipe-separated text labels to search for, e.g. "Hemoglobin (Hb)|Hemoglobin".
    pub pattern: String,
    /// 1-based index of the pattern match to take. Differential percentage
    /// rows precede absolute-count rows on a CBC printout, so percentage
    /// entries use occurrence 1 and absolute entries occurrence 2.
    pub occurrence: usize,
    /// Lower bound of the reference range (inclusive).
    pub low: f64,
    /// Upper bound of the reference range (inclusive).
    pub high: f64,
    /// Unit the value is reported in, e.g. "g/dL".
    pub unit: String,
    /// Clinical implication of a below-range value, e.g. "anemia".
    pub low_implication: Option<String>,
}

impl ParameterSpec {
    /// Iterate the text labels in search order (first match wins).
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.pattern.split('|').map(str::trim).filter(|s| !s.is_empty())
    }
}
