use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid source document {id}: {reason}")]
    InvalidDocument { id: String, reason: String },

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Invalid keyword pattern '{pattern}': {reason}")]
    InvalidKeywordPattern { pattern: String, reason: String },

    #[error("Invalid effective time: {0}")]
    InvalidEffectiveTime(String),

    #[error("Extraction task failed: {0}")]
    ExtractionTaskFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<ConfigError> for DomainError {
    fn from(e: ConfigError) -> Self {
        DomainError::ConfigError(e.to_string())
    }
}
