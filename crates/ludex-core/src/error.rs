//! Error types for Ludex

use thiserror::Error;

/// Core error type for Ludex operations
#[derive(Error, Debug)]
pub enum LudexError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Ludex operations
pub type Result<T> = std::result::Result<T, LudexError>;
