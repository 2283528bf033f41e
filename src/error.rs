use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyBreakError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid Key: {0}")]
    InvalidKey(String),
}

pub type KbResult<T> = Result<T, KeyBreakError>;
