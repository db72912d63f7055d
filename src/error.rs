//! Error types for mediatriage.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during triage and plan construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested track reference or language code was invalid.
    ///
    /// Always a caller error, recoverable by re-prompting for choices.
    #[error("invalid remediation target '{key}': {message}")]
    InvalidTarget { key: String, message: String },

    /// No assignments were requested for a file that needs remediation.
    ///
    /// The caller must supply at least one assignment or explicitly opt out
    /// of fixing the unknown tracks.
    #[error("no assignments requested for {}, which has unknown-language tracks", path.display())]
    EmptyPlan { path: PathBuf },

    /// An executor reported that applying a plan failed.
    ///
    /// Opaque to the core; propagated for user-visible reporting. Retries
    /// are a caller policy choice.
    #[error("plan execution failed: {message}")]
    ExecutionFailed { message: String },

    /// A catalog entry violated the media file preconditions.
    #[error("invalid media file {}: {message}", path.display())]
    InvalidMediaFile { path: PathBuf, message: String },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid target error.
    pub fn invalid_target(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTarget {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an empty plan error.
    pub fn empty_plan(path: impl Into<PathBuf>) -> Self {
        Self::EmptyPlan { path: path.into() }
    }

    /// Create an execution failed error.
    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::ExecutionFailed {
            message: message.into(),
        }
    }

    /// Create an invalid media file error.
    pub fn invalid_media_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidMediaFile {
            path: path.into(),
            message: message.into(),
        }
    }
}
