pub mod render;
pub mod repos;
pub mod sync;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use templar_core::{config, Config};
use templar_render::TemplateEngine;

/// Discover and load the configuration, returning its path alongside it so
/// relative template directories resolve against the right location.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<(PathBuf, Config)> {
    let path = config::discover(explicit).context("could not locate a templar.json configuration")?;
    let loaded = config::load_at(&path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    Ok((path, loaded))
}

/// Build the template engine over the configured (or overridden) directory.
pub(crate) fn build_engine(
    config_path: &Path,
    config: &Config,
    override_dir: Option<&Path>,
) -> Result<TemplateEngine> {
    let dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => config::template_dir(config_path, config),
    };
    TemplateEngine::new(&dir)
        .with_context(|| format!("failed to load templates from {}", dir.display()))
}
