//! `templar repos` — show the configured repositories and template files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use templar_core::Config;

/// Arguments for `templar repos`.
#[derive(Args, Debug)]
pub struct ReposArgs {
    /// Path to the configuration file (default: ./templar.json).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct RepoTableRow {
    #[tabled(rename = "repository")]
    repository: String,
    #[tabled(rename = "sync")]
    sync: String,
}

#[derive(Serialize)]
struct ReposJson {
    branch: String,
    template_files: Vec<String>,
    repositories: Vec<RepoJson>,
}

#[derive(Serialize)]
struct RepoJson {
    owner: String,
    repo: String,
    update_template_files: bool,
}

impl ReposArgs {
    pub fn run(self) -> Result<()> {
        let (_, config) = super::load_config(self.config.as_deref())?;

        if self.json {
            print_json(&config)?;
            return Ok(());
        }

        print_table(&config);
        Ok(())
    }
}

fn print_json(config: &Config) -> Result<()> {
    let payload = ReposJson {
        branch: config.branch.clone(),
        template_files: config.template_files.clone(),
        repositories: config
            .repositories
            .iter()
            .map(|r| RepoJson {
                owner: r.owner.clone(),
                repo: r.repo.clone(),
                update_template_files: r.update_template_files,
            })
            .collect(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize repos JSON")?
    );
    Ok(())
}

fn print_table(config: &Config) {
    let enabled = config.enabled_repositories().count();
    println!(
        "Templar v{} | {} repositories ({} enabled) | branch '{}'",
        env!("CARGO_PKG_VERSION"),
        config.repositories.len(),
        enabled,
        config.branch,
    );

    if config.repositories.is_empty() {
        println!("No repositories configured.");
        return;
    }

    let rows: Vec<RepoTableRow> = config
        .repositories
        .iter()
        .map(|r| RepoTableRow {
            repository: r.slug(),
            sync: if r.update_template_files {
                "enabled".green().to_string()
            } else {
                "disabled".bright_black().to_string()
            },
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    if config.template_files.is_empty() {
        println!("No template files configured.");
        return;
    }
    println!("Template files:");
    for file in &config.template_files {
        println!("  {file}");
    }
}
