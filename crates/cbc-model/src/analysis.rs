use std::fmt;

use serde::{Deserialize, Serialize};

/// Result status of a single classified reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Normal,
    Low,
    High,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "Normal",
            Status::Low => "Low",
            Status::High => "High",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Abnormality direction: below range or above range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Deficiency,
    Elevation,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Deficiency => "deficiency",
            Direction::Elevation => "elevation",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single classified reading: the extracted value compared against the
/// parameter's reference range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Canonical parameter name.
    pub parameter: String,
    pub value: f64,
    pub unit: String,
    /// Lower bound of the reference range (inclusive).
    pub low: f64,
    /// Upper bound of the reference range (inclusive).
    pub high: f64,
    pub status: Status,
    /// Clinical implication of a below-range value, carried from the spec.
    pub low_implication: Option<String>,
}

impl Classification {
    /// The abnormality direction, or `None` when the reading is normal.
    pub fn direction(&self) -> Option<Direction> {
        match self.status {
            Status::Low => Some(Direction::Deficiency),
            Status::High => Some(Direction::Elevation),
            Status::Normal => None,
        }
    }
}

/// One abnormal result, identified by the canonical parameter name and the
/// abnormality direction. This typed pair is the only key passed between
/// components; it is never flattened into a string until final rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbnormalFinding {
    pub parameter: String,
    pub direction: Direction,
}

/// The full analysis of one report: every classified reading in panel order,
/// the abnormal findings derived from them, the rendered per-reading lines,
/// and the one-line verdict. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub classifications: Vec<Classification>,
    pub findings: Vec<AbnormalFinding>,
    pub summary_lines: Vec<String>,
    pub verdict: String,
}

impl ReportAnalysis {
    pub fn is_all_normal(&self) -> bool {
        self.findings.is_empty()
    }

    /// The clinical summary block: per-reading lines followed by the verdict.
    pub fn clinical_summary(&self) -> String {
        if self.summary_lines.is_empty() {
            return self.verdict.clone();
        }
        let mut text = self.summary_lines.join("\n");
        text.push('\n');
        text.push_str(&self.verdict);
        text
    }
}
