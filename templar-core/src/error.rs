//! Error types for templar-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error on load — includes file path and line context from serde_json.
    #[error("failed to parse configuration at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No configuration file at the expected path.
    #[error("configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.config/templar/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
