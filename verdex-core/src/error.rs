use crate::validate::ValidationError;
use verdex_model::ModelError;

/// Error taxonomy for the catalog engine.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("payment rejected: {0}")]
    Payment(String),

    #[error("checkout state error: {0}")]
    Checkout(String),
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Storage(err.to_string())
    }
}

impl From<ModelError> for CoreError {
    fn from(err: ModelError) -> Self {
        CoreError::Invalid(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
