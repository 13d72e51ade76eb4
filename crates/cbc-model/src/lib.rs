pub mod analysis;
pub mod error;
pub mod outputs;
pub mod parameter;

pub use analysis::{AbnormalFinding, Classification, Direction, ReportAnalysis, Status};
pub use error::{EngineError, Result};
pub use outputs::{Intent, TriageOutputs, TriageResponse};
pub use parameter::ParameterSpec;
