//! JSON configuration loading.
//!
//! # Discovery order
//!
//! 1. explicit `--config` path, when given
//! 2. `./templar.json`
//! 3. `~/.config/templar/templar.json`
//!
//! The configuration is loaded once at process start and trusted as-is; a
//! malformed document is a fatal startup error.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::Config;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "templar.json";

/// Load the configuration from `path`.
///
/// Returns `ConfigError::ConfigNotFound` if absent,
/// `ConfigError::Parse` (with path + line context) if malformed JSON.
pub fn load_at(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve the configuration file path.
///
/// An explicit path always wins (and is returned even if it does not exist,
/// so the subsequent load reports the path the user asked for).
pub fn discover(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return Ok(local);
    }
    let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
    let fallback = home.join(".config").join("templar").join(CONFIG_FILE);
    if fallback.exists() {
        return Ok(fallback);
    }
    Err(ConfigError::ConfigNotFound { path: local })
}

/// Template source directory for a loaded configuration.
///
/// Relative `templateDir` values are rooted at the configuration file's
/// parent directory, so a repo-local `templar.json` finds its sibling
/// `templates/` no matter where the tool is invoked from.
pub fn template_dir(config_path: &Path, config: &Config) -> PathBuf {
    if config.template_dir.is_absolute() {
        return config.template_dir.clone();
    }
    config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(&config.template_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
