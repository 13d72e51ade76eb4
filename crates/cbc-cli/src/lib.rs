//! Shared CLI infrastructure for the `cbc-triage` binary.

pub mod logging;
pub mod render;
