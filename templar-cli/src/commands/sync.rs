//! `templar sync` — render and push template files to every enabled repository.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use templar_github::{access_token_from_env, GitHubClient};
use templar_sync::{sync_all, FileAction, RepoOutcome, SyncReport};

/// Arguments for `templar sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path to the configuration file (default: ./templar.json).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the template directory from the configuration.
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Show what would be pushed without issuing any write call.
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        // Credential check comes first so a missing token terminates before
        // any network call or filesystem read.
        let token = access_token_from_env()?;

        let (config_path, config) = super::load_config(self.config.as_deref())?;
        let engine = super::build_engine(&config_path, &config, self.templates.as_deref())?;
        let client = GitHubClient::new(token);

        let report = sync_all(&client, &engine, &config, self.dry_run);
        print_report(&report, self.dry_run);

        if !report.is_clean() {
            anyhow::bail!(
                "{} of {} repositories had failures",
                report.failed_repos(),
                report.processed_repos(),
            );
        }
        Ok(())
    }
}

fn print_report(report: &SyncReport, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    for outcome in &report.outcomes {
        match outcome {
            RepoOutcome::Skipped { repo } => {
                println!("-  '{repo}' skipped (updateTemplateFiles: false)");
            }
            RepoOutcome::Failed { repo, error } => {
                println!("✗  '{repo}' failed: {error}");
            }
            RepoOutcome::Synced(result) => {
                println!(
                    "{prefix}✓ '{}' synced ({} written, {} unchanged, {} failed)",
                    result.repo,
                    result.written(),
                    result.unchanged(),
                    result.failures.len(),
                );
                for action in &result.actions {
                    match action {
                        FileAction::Created { path } => println!("  +  {path}"),
                        FileAction::Updated { path } => println!("  ✎  {path}"),
                        FileAction::Unchanged { path } => println!("  ·  {path} (up to date)"),
                        FileAction::WouldCreate { path } => println!("  ~  {path} (would create)"),
                        FileAction::WouldUpdate { path } => println!("  ~  {path} (would update)"),
                    }
                }
                for failure in &result.failures {
                    println!("  ✗  {}: {}", failure.path, failure.error);
                }
            }
        }
    }
}
