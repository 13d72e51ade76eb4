//! Rule-based CBC report triage engine.
//!
//! Given extracted report text and a patient query, the engine pulls known
//! panel values out of the text, classifies each against its reference
//! range, derives advice from the abnormal findings, and returns only the
//! sections relevant to the query. All stages are deterministic, synchronous,
//! and side-effect-free; the static tables come from [`cbc_standards`] and
//! are shared by reference.

pub mod advice;
pub mod classify;
pub mod extract;
pub mod intent;
pub mod links;
pub mod pipeline;
pub mod summary;

pub use advice::{ProteinPolicy, generate_advice};
pub use classify::classify;
pub use extract::extract_value;
pub use intent::{route, select};
pub use links::{NO_ABNORMALITIES, resolve_links};
pub use pipeline::{TriageReport, TriageRequest, analyze, build_outputs, run};
pub use summary::{ALL_NORMAL_VERDICT, build_analysis};
