//! Error types for the river-crossing scheduler

use thiserror::Error;

/// Main error type for crossing operations
#[derive(Debug, Error)]
pub enum CrossingError {
    /// Error in search configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A crossing does not fit the roster it is applied to
    #[error("Invalid roster operation: {0}")]
    InvalidRoster(String),
}

/// Result type alias for crossing operations
pub type Result<T> = std::result::Result<T, CrossingError>;
