//! Error types for the EduRH workload toolkit

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Nothing to export: report '{0}' has no rows")]
    EmptyReport(String),

    #[error("Invalid login response: {0}")]
    InvalidLogin(String),

    #[error("Not logged in. Run: edurh login --response <FILE>")]
    NotLoggedIn,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
