use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Invalid advertisement record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("Invalid hex payload for manufacturer {manufacturer_id}: {source}")]
    InvalidHex {
        manufacturer_id: u16,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Sink error: {0}")]
    SinkError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScannerResult<T> = Result<T, ScannerError>;
