use thiserror::Error;

/// Unified error type for the form, storage, and configuration layers.
#[derive(Debug, Error)]
pub enum ChequeError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),
    #[error("Unknown bank: {0}")]
    BankNotFound(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ChequeError>;

impl From<std::io::Error> for ChequeError {
    fn from(err: std::io::Error) -> Self {
        ChequeError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for ChequeError {
    fn from(err: serde_json::Error) -> Self {
        ChequeError::StorageError(err.to_string())
    }
}

impl From<dialoguer::Error> for ChequeError {
    fn from(err: dialoguer::Error) -> Self {
        ChequeError::InvalidInput(err.to_string())
    }
}
