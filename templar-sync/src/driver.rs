//! Sync orchestration.
//!
//! ## Per-repository procedure
//!
//! 1. Fetch repository metadata; derive the template context from the
//!    creation year. Failure here is fatal for this repository only.
//! 2. For each configured template file, independently:
//!    render → fetch remote → compare decoded bytes → create / update / skip.
//! 3. Per-file errors are recorded in the result, never aborting siblings.
//!
//! A remote write happens iff the file is absent remotely or its decoded
//! content differs byte-for-byte from the rendered content.

use chrono::Datelike;

use templar_core::{Committer, Config, RepoRef};
use templar_github::{FileWrite, RepoHost};
use templar_render::{TemplateContext, TemplateEngine};

use crate::error::SyncError;
use crate::report::{FileAction, FileFailure, RepoOutcome, RepoSyncResult, SyncReport};

/// Shared per-run parameters, borrowed from the loaded configuration.
#[derive(Debug, Clone, Copy)]
pub struct SyncPlan<'a> {
    pub branch: &'a str,
    pub committer: &'a Committer,
    pub template_files: &'a [String],
    /// Report what would be written without issuing any write call.
    pub dry_run: bool,
}

impl<'a> SyncPlan<'a> {
    pub fn from_config(config: &'a Config, dry_run: bool) -> Self {
        SyncPlan {
            branch: &config.branch,
            committer: &config.committer,
            template_files: &config.template_files,
            dry_run,
        }
    }
}

fn sync_file<H: RepoHost>(
    host: &H,
    engine: &TemplateEngine,
    repo: &RepoRef,
    file: &str,
    ctx: &TemplateContext,
    plan: &SyncPlan,
) -> Result<FileAction, SyncError> {
    let rendered = engine.render(file, ctx)?;
    let existing = host.fetch_file(&repo.owner, &repo.repo, file, plan.branch)?;

    match existing {
        Some(remote) if remote.content == rendered.as_bytes() => {
            tracing::info!("'{}' already up to date for {}", file, repo.slug());
            Ok(FileAction::Unchanged { path: file.to_string() })
        }
        Some(remote) => {
            if plan.dry_run {
                tracing::info!("[dry-run] would update '{}' for {}", file, repo.slug());
                return Ok(FileAction::WouldUpdate { path: file.to_string() });
            }
            tracing::info!("updating '{}' for {}", file, repo.slug());
            host.put_file(
                &repo.owner,
                &repo.repo,
                &FileWrite {
                    path: file.to_string(),
                    branch: plan.branch.to_string(),
                    message: format!("chore: update {file}"),
                    content: rendered.into_bytes(),
                    sha: Some(remote.sha),
                    committer: plan.committer.clone(),
                },
            )?;
            Ok(FileAction::Updated { path: file.to_string() })
        }
        None => {
            if plan.dry_run {
                tracing::info!("[dry-run] would create '{}' for {}", file, repo.slug());
                return Ok(FileAction::WouldCreate { path: file.to_string() });
            }
            tracing::info!("creating '{}' for {}", file, repo.slug());
            host.put_file(
                &repo.owner,
                &repo.repo,
                &FileWrite {
                    path: file.to_string(),
                    branch: plan.branch.to_string(),
                    message: format!("chore: add {file}"),
                    content: rendered.into_bytes(),
                    sha: None,
                    committer: plan.committer.clone(),
                },
            )?;
            Ok(FileAction::Created { path: file.to_string() })
        }
    }
}

/// Sync every configured template file into one repository.
///
/// The metadata fetch failing is an `Err` for this repository; per-file
/// errors are collected into [`RepoSyncResult::failures`] so one bad file
/// never blocks the rest.
pub fn sync_repo<H: RepoHost>(
    host: &H,
    engine: &TemplateEngine,
    repo: &RepoRef,
    plan: &SyncPlan,
) -> Result<RepoSyncResult, SyncError> {
    let info = host.repo_info(&repo.owner, &repo.repo)?;
    let ctx = TemplateContext::new(info.created_at.year());

    let mut actions = Vec::new();
    let mut failures = Vec::new();
    for file in plan.template_files {
        match sync_file(host, engine, repo, file, &ctx, plan) {
            Ok(action) => actions.push(action),
            Err(error) => {
                tracing::error!("'{}' failed for {}: {}", file, repo.slug(), error);
                failures.push(FileFailure { path: file.clone(), error });
            }
        }
    }

    Ok(RepoSyncResult {
        repo: repo.slug(),
        actions,
        failures,
    })
}

/// Sync every repository in the configuration, one at a time, collecting one
/// [`RepoOutcome`] per entry.
///
/// Repositories with `updateTemplateFiles: false` are skipped without a
/// single API call. A repository-level failure is recorded and the run moves
/// on to the next repository.
pub fn sync_all<H: RepoHost>(
    host: &H,
    engine: &TemplateEngine,
    config: &Config,
    dry_run: bool,
) -> SyncReport {
    let plan = SyncPlan::from_config(config, dry_run);
    let mut outcomes = Vec::new();

    for repo in &config.repositories {
        if !repo.update_template_files {
            tracing::debug!("skipping {} (updateTemplateFiles: false)", repo.slug());
            outcomes.push(RepoOutcome::Skipped { repo: repo.slug() });
            continue;
        }
        tracing::info!("updating template files for {}", repo.slug());
        match sync_repo(host, engine, repo, &plan) {
            Ok(result) => outcomes.push(RepoOutcome::Synced(result)),
            Err(error) => {
                tracing::error!("{} failed: {}", repo.slug(), error);
                outcomes.push(RepoOutcome::Failed { repo: repo.slug(), error });
            }
        }
    }

    SyncReport { outcomes }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
