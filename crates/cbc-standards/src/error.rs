#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to parse TOML manifest: {source}")]
    Toml {
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid manifest: {message}")]
    InvalidManifest { message: String },

    #[error("missing required role in manifest: {role}")]
    MissingRole { role: String },

    #[error("duplicate role in manifest: {role}")]
    DuplicateRole { role: String },

    #[error("no embedded asset for manifest path: {path}")]
    MissingAsset { path: String },

    #[error("sha256 mismatch for {path} (expected {expected}, got {actual})")]
    Sha256Mismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: String, message: String },

    #[error("invalid reference range for {name}: low {low} exceeds high {high}")]
    InvalidRange { name: String, low: f64, high: f64 },

    #[error("duplicate canonical parameter name: {name}")]
    DuplicateParameter { name: String },

    #[error("table {table} references unknown parameter: {name}")]
    UnknownParameter { table: String, name: String },
}
