use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("no manufacturer data for id {0:#06x}")]
    MissingManufacturerData(u16),

    #[error("empty payload")]
    EmptyPayload,

    #[error("insufficient data: expected at least {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("unsupported model: {0}")]
    UnsupportedModel(u16),

    #[error("json serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PayloadError>;
