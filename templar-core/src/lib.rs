//! Templar core library — domain types, configuration loading, errors.
//!
//! Public API surface:
//! - [`types`] — configuration structs and defaults
//! - [`error`] — [`ConfigError`]
//! - [`config`] — discover / load

pub mod config;
pub mod error;
pub mod types;

pub use error::ConfigError;
pub use types::{Committer, Config, RepoRef};
