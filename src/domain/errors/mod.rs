// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    BadArgs(String),
    /// File not found
    FileNotFound(String),
    /// Filesystem operation failed
    FsFail(String),
    /// External process could not be spawned or awaited
    ProcessFail(String),
    /// Configuration could not be read or is invalid
    ConfigFail(String),
    /// A filter graph was requested for an empty interval list
    NoIntervals,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::FileNotFound(msg) => write!(f, "File not found: {}", msg),
            DomainError::FsFail(msg) => write!(f, "Filesystem error: {}", msg),
            DomainError::ProcessFail(msg) => write!(f, "Process error: {}", msg),
            DomainError::ConfigFail(msg) => write!(f, "Configuration error: {}", msg),
            DomainError::NoIntervals => write!(f, "Cannot build a filter graph without intervals"),
        }
    }
}

impl std::error::Error for DomainError {}
