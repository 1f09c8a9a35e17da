//! # templar-render
//!
//! Tera-based template engine that renders per-repository file contents from
//! a local template directory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use templar_render::{TemplateContext, TemplateEngine};
//!
//! fn render_license(dir: &Path) {
//!     if let Ok(engine) = TemplateEngine::new(dir) {
//!         let ctx = TemplateContext::new(2015);
//!         if let Ok(content) = engine.render("LICENSE.md", &ctx) {
//!             println!("{} bytes", content.len());
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::TemplateEngine;
pub use error::RenderError;
