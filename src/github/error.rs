//! GitHub API error types

use thiserror::Error;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error (transport, non-success status, auth)
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Response body was not valid JSON
    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    /// Required arguments were absent; raised before any request is sent
    #[error("{operation}: missing required arguments: {}", .missing.join(", "))]
    MissingArguments {
        /// Operation that rejected the call
        operation: &'static str,
        /// Names of every absent argument, in declaration order
        missing: Vec<&'static str>,
    },

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

impl GitHubError {
    /// True when the call was rejected locally, before any I/O.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, GitHubError::MissingArguments { .. } | GitHubError::InvalidInput(_))
    }
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;
