use std::io;
use thiserror::Error;

/// IO-level errors for script parsing and output
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV parsing error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid operation type: {0}")]
    InvalidOperationType(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid amount format: {0}")]
    InvalidAmount(String),
}
