use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

pub type Result<T> = std::result::Result<T, SharedError>;
