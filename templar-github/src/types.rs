//! Remote repository types and the [`RepoHost`] seam.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use templar_core::Committer;

use crate::error::ApiError;

/// Repository metadata from `GET /repos/{owner}/{repo}`.
///
/// Only the creation timestamp is carried; the template context is derived
/// from its calendar year.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoInfo {
    pub created_at: DateTime<Utc>,
}

/// A file as currently stored in the remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// Decoded file bytes.
    pub content: Vec<u8>,
    /// The Contents API hash token, required to update this file safely.
    pub sha: String,
}

/// One create-or-update call against the Contents API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWrite {
    /// Destination path within the repository.
    pub path: String,
    pub branch: String,
    pub message: String,
    /// Raw rendered bytes; the client base64-encodes them on the wire.
    pub content: Vec<u8>,
    /// Hash token of the existing remote file. `None` creates, `Some` updates.
    pub sha: Option<String>,
    pub committer: Committer,
}

/// The remote operations the sync driver needs.
///
/// Implemented by [`crate::GitHubClient`] for the real API and by in-memory
/// fakes in sync-driver tests.
pub trait RepoHost {
    /// Fetch repository metadata.
    fn repo_info(&self, owner: &str, repo: &str) -> Result<RepoInfo, ApiError>;

    /// Fetch the file at `path` on `branch`. `Ok(None)` means the file does
    /// not exist remotely (the expected create path); any other failure is
    /// an `Err`.
    fn fetch_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        branch: &str,
    ) -> Result<Option<RemoteFile>, ApiError>;

    /// Create or update a file in a single all-or-nothing call.
    fn put_file(&self, owner: &str, repo: &str, write: &FileWrite) -> Result<(), ApiError>;
}
