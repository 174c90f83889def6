use std::io;
use thiserror::Error;

/// Custom error type for the wattmon application
#[derive(Error, Debug)]
pub enum WattmonError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid numeric input: {0}")]
    InvalidNumericInput(String),

    #[error("Tracker runtime error: {0}")]
    Runtime(String),
}

/// Result type alias for the wattmon application
pub type Result<T> = std::result::Result<T, WattmonError>;

impl WattmonError {
    /// Create an invalid numeric input error
    pub fn invalid_numeric_input<S: Into<String>>(msg: S) -> Self {
        WattmonError::InvalidNumericInput(msg.into())
    }

    /// Create a tracker runtime error
    pub fn runtime<S: Into<String>>(msg: S) -> Self {
        WattmonError::Runtime(msg.into())
    }
}
