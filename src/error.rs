use thiserror::Error;

/// Custom error types for platepal
#[derive(Debug, Error)]
pub enum PlatePalError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
