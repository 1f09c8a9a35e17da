//! Template context — the per-repository substitution payload.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Variables available to every template.
///
/// Currently only the calendar year the target repository was created in,
/// taken from the repository metadata at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContext {
    pub year: i32,
}

impl TemplateContext {
    pub fn new(year: i32) -> Self {
        TemplateContext { year }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
