//! GitHub client errors

use thiserror::Error;

/// Errors returned by [`GitHubClient`](super::GitHubClient)
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// GitHub answered with a non-success status
    #[error("GitHub API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// GitHub's error message
        message: String,
    },

    /// Repository content was not base64-encoded file content
    #[error("Could not read {path}: {reason}")]
    Content {
        /// Repository path that was read
        path: String,
        /// What was wrong with it
        reason: String,
    },

    /// Base64 payload could not be decoded
    #[error("Invalid base64 content: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Payload was not valid JSON of the expected shape
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
