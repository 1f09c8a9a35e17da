//! Tera rendering engine loaded from a local template directory.
//!
//! Every regular file under the directory becomes a template, keyed by its
//! path relative to the directory (forward slashes on all platforms), so the
//! same string names both the local template source and the remote
//! destination path.

use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::TemplateContext;
use crate::error::RenderError;

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

/// Tera-based engine over a template directory.
///
/// Create once with [`TemplateEngine::new`] and reuse; rendering is
/// deterministic for a given template and context.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
    dir: PathBuf,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading every file under
    /// `template_dir` as a raw template.
    pub fn new(template_dir: &Path) -> Result<Self, RenderError> {
        let templates = load_templates(template_dir)?;
        let mut tera = Tera::default();
        // Templates are plain text (licenses, markdown); never HTML-escape.
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(templates)?;
        Ok(TemplateEngine {
            tera,
            dir: template_dir.to_path_buf(),
        })
    }

    /// Names of all loaded templates, sorted.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    /// Render the template called `name` with the supplied context.
    ///
    /// A template that references a variable missing from the context fails
    /// with [`RenderError::Tera`]; an unknown name fails with
    /// [`RenderError::TemplateNotFound`].
    pub fn render(&self, name: &str, ctx: &TemplateContext) -> Result<String, RenderError> {
        if !self.tera.get_template_names().any(|n| n == name) {
            return Err(RenderError::TemplateNotFound {
                name: name.to_string(),
                dir: self.dir.clone(),
            });
        }
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(name, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
