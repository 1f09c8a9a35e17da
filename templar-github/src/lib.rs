//! # templar-github
//!
//! Blocking GitHub REST v3 client for the three Contents API operations the
//! sync pipeline needs: repository metadata, file fetch, and file
//! create/update.
//!
//! The client is an explicit value constructed once from the environment
//! token and passed to every operation — there is no ambient global client.
//! The [`RepoHost`] trait is the seam that lets the sync driver run against
//! an in-memory fake in tests.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::access_token_from_env;
pub use client::GitHubClient;
pub use error::ApiError;
pub use types::{FileWrite, RemoteFile, RepoHost, RepoInfo};
