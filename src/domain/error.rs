use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    ReadError(String),
    ParseError(String),
    ValidationError(String),
    ConfigError(String),
}

impl AppError {
    /// Message without the category prefix, for display next to an upload panel
    pub fn message(&self) -> &str {
        match self {
            AppError::ReadError(msg)
            | AppError::ParseError(msg)
            | AppError::ValidationError(msg)
            | AppError::ConfigError(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ReadError(msg) => write!(f, "Read error: {}", msg),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::ReadError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
