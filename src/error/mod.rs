//! Error handling module for mpdecimate-trim

use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::model::Phase;

/// Process exit code for a skipped run
pub const EXIT_SKIPPED: u8 = 2;
/// Process exit code for a failed external tool
pub const EXIT_TOOL_FAILURE: u8 = 3;

/// Main error type for mpdecimate-trim operations
#[derive(Error, Debug)]
pub enum TrimError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// The decimation log produced no interval to keep
    #[error("No segments to keep were found in the decimation log")]
    NothingToKeep,

    /// ffmpeg exited unsuccessfully
    #[error("The {phase} phase failed with {}", describe_exit(.exit_code))]
    ExternalToolFailure { phase: Phase, exit_code: Option<i32> },

    /// Domain or adapter error
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl TrimError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            TrimError::ExternalToolFailure { .. } => EXIT_TOOL_FAILURE,
            _ => 1,
        }
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("code {}", code),
        None => "a signal".to_string(),
    }
}

/// Result type alias for mpdecimate-trim operations
pub type TrimResult<T> = std::result::Result<T, TrimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_failure_message_and_code() {
        let error = TrimError::ExternalToolFailure {
            phase: Phase::Transcode,
            exit_code: Some(187),
        };
        assert_eq!(error.to_string(), "The transcode phase failed with code 187");
        assert_eq!(error.exit_code(), EXIT_TOOL_FAILURE);

        let killed = TrimError::ExternalToolFailure {
            phase: Phase::Decimate,
            exit_code: None,
        };
        assert_eq!(killed.to_string(), "The decimate phase failed with a signal");
    }

    #[test]
    fn test_domain_errors_are_transparent() {
        let error: TrimError = DomainError::NoIntervals.into();
        assert_eq!(error.to_string(), DomainError::NoIntervals.to_string());
        assert_eq!(error.exit_code(), 1);
    }
}
