//! Templar — sync template files across GitHub repositories.
//!
//! # Usage
//!
//! ```text
//! templar sync [--dry-run] [--config <path>] [--templates <dir>]
//! templar repos [--config <path>] [--json]
//! templar render <template> --year <n> [--config <path>] [--templates <dir>]
//! ```
//!
//! `sync` requires `GITHUB_ACCESS_TOKEN` in the environment; `repos` and
//! `render` never touch the network.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{render::RenderArgs, repos::ReposArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "templar",
    version,
    about = "Sync template files (license, contributing guide, ...) across GitHub repositories",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render and push template files to every enabled repository.
    Sync(SyncArgs),

    /// List the configured repositories and template files.
    Repos(ReposArgs),

    /// Render a single template locally and print the result.
    Render(RenderArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::Repos(args) => args.run(),
        Commands::Render(args) => args.run(),
    }
}
