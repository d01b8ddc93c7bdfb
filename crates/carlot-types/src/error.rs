//! Error types for carlot

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

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("sold flag and buyer id disagree for car {0}")]
    InconsistentRecord(String),

    #[error("not logged in: pass --buyer or run `carlot login <user-id>`")]
    NotLoggedIn,
}

pub type Result<T> = std::result::Result<T, Error>;
