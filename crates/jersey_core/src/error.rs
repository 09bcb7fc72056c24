use thiserror::Error;

/// Errors at the fallible edges of the core: parsing and (de)serialization.
///
/// Allocation itself never fails; an exhausted inventory shows up as a
/// shorter assignment list.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown jersey size: {0}")]
    UnknownSize(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: String, expected: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// Stable code used in API error envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::UnknownSize(_) => "UNKNOWN_SIZE",
            CoreError::InvalidRequest(_) => "INVALID_REQUEST",
            CoreError::SchemaVersion { .. } => "SCHEMA_VERSION",
            CoreError::Serialization(_) => "SERIALIZATION_ERROR",
            CoreError::Deserialization(_) => "DESERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CoreError::Deserialization(err.to_string())
        } else {
            CoreError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
