//! Errors for db-clock
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Configuration error")]
    ConfigError(#[from] config::ConfigError),

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Serialization error")]
    SerdeError(#[from] serde_json::Error),

    #[error("IO error")]
    IoError(#[from] std::io::Error),

    #[error("Database error")]
    DatabaseError(#[from] sqlx::Error),

    #[error("No database connection")]
    NotConnected,

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] hyper_util::client::legacy::Error),

    #[error("HTTP body error: {0}")]
    HttpBodyError(#[from] hyper::Error),

    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),

    #[error("Response contained no rows")]
    EmptyResponse,
}
