
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Board Format Error: {0}")]
    BoardFormat(String),

    #[error("Dictionary Error: {0}")]
    Dictionary(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type WfResult<T> = Result<T, WordForgeError>;
