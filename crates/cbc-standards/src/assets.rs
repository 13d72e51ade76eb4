#![deny(unsafe_code)]

//! Embedded standards assets. The tables ship inside the binary so the
//! engine has no filesystem or network dependency at run time; the manifest
//! pins each asset by sha256 and the registry refuses to load on a mismatch.

pub const MANIFEST_TOML: &str = include_str!("../standards/manifest.toml");

const REFERENCE_RANGES_CSV: &str = include_str!("../standards/cbc_reference_ranges.csv");
const REFERENCE_LINKS_CSV: &str = include_str!("../standards/reference_links.csv");
const ADVICE_LOW_CSV: &str = include_str!("../standards/advice_low.csv");
const ADVICE_HIGH_CSV: &str = include_str!("../standards/advice_high.csv");
const EXERCISE_PLAN_TXT: &str = include_str!("../standards/exercise_plan.txt");

/// Resolve a manifest path to its embedded contents.
pub fn asset_for_path(path: &str) -> Option<&'static str> {
    match path {
        "cbc_reference_ranges.csv" => Some(REFERENCE_RANGES_CSV),
        "reference_links.csv" => Some(REFERENCE_LINKS_CSV),
        "advice_low.csv" => Some(ADVICE_LOW_CSV),
        "advice_high.csv" => Some(ADVICE_HIGH_CSV),
        "exercise_plan.txt" => Some(EXERCISE_PLAN_TXT),
        _ => None,
    }
}
