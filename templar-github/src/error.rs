//! Error types for templar-github.

use thiserror::Error;

use crate::auth::TOKEN_VAR;

/// All errors that can arise from GitHub API calls.
///
/// A remote "file not found" is not an error: [`crate::RepoHost::fetch_file`]
/// returns `Ok(None)` for HTTP 404 because an absent file is the expected
/// create path. Every other non-success status lands in [`ApiError::Status`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The access token environment variable is absent or empty.
    #[error("{TOKEN_VAR} environment variable must be provided")]
    MissingToken,

    /// GitHub answered with a non-success status. An update call that lost an
    /// optimistic-concurrency race (stale sha) surfaces here as a 409.
    #[error("GitHub API returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Connection, DNS, TLS, or timeout failure.
    #[error("transport error calling {url}: {source}")]
    Transport {
        url: String,
        source: Box<ureq::Transport>,
    },

    /// The response body could not be read or deserialized.
    #[error("failed to read response from {url}: {source}")]
    Body { url: String, source: std::io::Error },

    /// Stored file content was not valid base64.
    #[error("invalid base64 content for {path}: {source}")]
    Content {
        path: String,
        source: base64::DecodeError,
    },
}
