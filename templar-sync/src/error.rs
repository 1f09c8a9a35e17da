//! Error types for templar-sync.

use thiserror::Error;

use templar_github::ApiError;
use templar_render::RenderError;

/// All errors that can arise while syncing one unit of work.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error from the GitHub API.
    #[error("GitHub API error: {0}")]
    Api(#[from] ApiError),
}
