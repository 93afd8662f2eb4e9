use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents a missing or corrupt resource file (dataset, embedding table).
    /// Fatal at startup.
    #[error("Load error: {0}")]
    Load(String),

    /// Represents malformed training data (length mismatch, missing class).
    /// Fatal at startup.
    #[error("Training error: {0}")]
    Training(String),

    /// Represents an unreachable or misbehaving dependency-parse server.
    /// Surfaced to the operator; never silently degraded to zero counts.
    #[error("Dependency parser unavailable: {0}")]
    ParseUnavailable(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Load(format!("CSV error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ParseUnavailable(err.to_string())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;
