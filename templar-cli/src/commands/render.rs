//! `templar render <template>` — local render preview, no network.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use templar_render::TemplateContext;

/// Arguments for `templar render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Template name, e.g. `LICENSE.md`.
    pub template: String,

    /// Value for the `year` template variable.
    #[arg(long)]
    pub year: i32,

    /// Path to the configuration file (default: ./templar.json).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the template directory from the configuration.
    #[arg(long)]
    pub templates: Option<PathBuf>,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let (config_path, config) = super::load_config(self.config.as_deref())?;
        let engine = super::build_engine(&config_path, &config, self.templates.as_deref())?;

        let rendered = engine
            .render(&self.template, &TemplateContext::new(self.year))
            .with_context(|| {
                format!(
                    "failed to render '{}' (loaded templates: {})",
                    self.template,
                    engine.template_names().join(", ")
                )
            })?;

        print!("{rendered}");
        if !rendered.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
