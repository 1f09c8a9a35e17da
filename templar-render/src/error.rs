//! Error types for templar-render.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template loading and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error — covers undefined variables referenced by
    /// a template as well as template syntax errors.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while reading templates from the template directory.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// A configured template file has no source in the template directory.
    #[error("template '{name}' not found under {dir}")]
    TemplateNotFound { name: String, dir: PathBuf },
}
