//! # templar-sync
//!
//! The fetch → render → compare → write driver.
//!
//! Call [`sync_repo`] to push every configured template file into a single
//! repository, or [`sync_all`] to process the whole configuration and get an
//! aggregated [`SyncReport`]. No failure is silently lost: per-file errors
//! are collected into the repository result and a repository-level failure is
//! scoped to that repository, never aborting its siblings.

pub mod driver;
pub mod error;
pub mod report;

pub use driver::{sync_all, sync_repo, SyncPlan};
pub use error::SyncError;
pub use report::{FileAction, FileFailure, RepoOutcome, RepoSyncResult, SyncReport};
