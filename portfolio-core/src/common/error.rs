use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("JSON (de)serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid seed content: {0}")]
    SeedContent(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortfolioError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
