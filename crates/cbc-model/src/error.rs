use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid patient weight {value} kg: expected a positive finite number")]
    InvalidWeight { value: f64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
