//! Error handling for scout.
//!
//! [`ScoutError`] is the single error enum for all scout operations; the
//! crate-wide [`Result`] alias uses it.

use std::io;

use thiserror::Error;

/// Main error type for scout operations.
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Please enter a job description")]
    EmptyJobDescription,

    #[error("Candidate not found: {0}")]
    CandidateNotFound(String),

    #[error("Interactive terminal required: {0}")]
    TerminalRequired(String),

    #[error("Search worker failed: {0}")]
    Worker(String),
}

impl ScoutError {
    /// Stable machine-readable code for robot-mode error envelopes.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "SERIALIZATION_ERROR",
            Self::Config(_) => "CONFIG_INVALID",
            Self::EmptyJobDescription => "EMPTY_JOB_DESCRIPTION",
            Self::CandidateNotFound(_) => "CANDIDATE_NOT_FOUND",
            Self::TerminalRequired(_) => "TERMINAL_REQUIRED",
            Self::Worker(_) => "WORKER_FAILED",
        }
    }
}

/// Result type alias using ScoutError.
pub type Result<T> = std::result::Result<T, ScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(ScoutError::EmptyJobDescription.code(), "EMPTY_JOB_DESCRIPTION");
        assert_eq!(ScoutError::Config("bad".into()).code(), "CONFIG_INVALID");
        assert_eq!(
            ScoutError::CandidateNotFound("c-404".into()).code(),
            "CANDIDATE_NOT_FOUND"
        );
    }

    #[test]
    fn test_empty_job_description_message_matches_form_toast() {
        let err = ScoutError::EmptyJobDescription;
        assert_eq!(err.to_string(), "Please enter a job description");
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: ScoutError = io_err.into();
        assert_eq!(err.code(), "IO_ERROR");
    }
}
