//! Per-unit sync outcomes and the aggregated run report.

use crate::error::SyncError;

/// Outcome of syncing one template file into one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    /// File was absent remotely and a create call was issued.
    Created { path: String },
    /// Remote content differed and an update call was issued.
    Updated { path: String },
    /// Remote content already matched the rendered content.
    Unchanged { path: String },
    /// Dry-run: a create call *would* have been issued.
    WouldCreate { path: String },
    /// Dry-run: an update call *would* have been issued.
    WouldUpdate { path: String },
}

impl FileAction {
    pub fn path(&self) -> &str {
        match self {
            FileAction::Created { path }
            | FileAction::Updated { path }
            | FileAction::Unchanged { path }
            | FileAction::WouldCreate { path }
            | FileAction::WouldUpdate { path } => path,
        }
    }

    /// True for actions that issued (or would issue) a remote write.
    pub fn is_write(&self) -> bool {
        !matches!(self, FileAction::Unchanged { .. })
    }
}

/// A per-file error, recorded with enough context to diagnose without
/// aborting the sibling files of the same repository.
#[derive(Debug)]
pub struct FileFailure {
    pub path: String,
    pub error: SyncError,
}

/// Result of syncing every template file into one repository.
#[derive(Debug)]
pub struct RepoSyncResult {
    /// `owner/repo`.
    pub repo: String,
    pub actions: Vec<FileAction>,
    pub failures: Vec<FileFailure>,
}

impl RepoSyncResult {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn written(&self) -> usize {
        self.actions.iter().filter(|a| a.is_write()).count()
    }

    pub fn unchanged(&self) -> usize {
        self.actions.len() - self.written()
    }
}

/// One repository's outcome within a full run.
#[derive(Debug)]
pub enum RepoOutcome {
    /// The repository was processed; the result may still carry file failures.
    Synced(RepoSyncResult),
    /// `updateTemplateFiles: false` — zero API calls were made.
    Skipped { repo: String },
    /// Repository-level failure (metadata fetch); siblings were unaffected.
    Failed { repo: String, error: SyncError },
}

/// Aggregated outcome of a full run, one entry per configured repository.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub outcomes: Vec<RepoOutcome>,
}

impl SyncReport {
    /// True iff no repository and no file failed. Drives the exit code.
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|outcome| match outcome {
            RepoOutcome::Synced(result) => result.is_clean(),
            RepoOutcome::Skipped { .. } => true,
            RepoOutcome::Failed { .. } => false,
        })
    }

    /// Count of repositories that failed outright or had file failures.
    pub fn failed_repos(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| match outcome {
                RepoOutcome::Synced(result) => !result.is_clean(),
                RepoOutcome::Skipped { .. } => false,
                RepoOutcome::Failed { .. } => true,
            })
            .count()
    }

    /// Count of repositories that were actually processed.
    pub fn processed_repos(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !matches!(o, RepoOutcome::Skipped { .. }))
            .count()
    }
}
