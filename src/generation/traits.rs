//! Port interfaces for the generation domain

use async_trait::async_trait;
use std::path::Path;

use crate::generation::{Artifact, GenerationError, RenderContext, TemplateId};

/// Resolves a named template and renders it against a model
///
/// Implementations must be pure: no I/O, clocks or randomness while rendering.
pub trait TemplateResolver: Send + Sync {
    /// Render one template
    fn render(&self, template: TemplateId, context: &RenderContext) -> Result<String, GenerationError>;

    /// Whether the template can be resolved at all
    fn has_template(&self, template: TemplateId) -> bool;
}

/// Service for writing generated artifacts beneath a project root
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write all artifacts below `root`, creating parent directories as needed
    async fn write_artifacts(&self, root: &Path, artifacts: &[Artifact]) -> Result<(), GenerationError>;

    /// Ensure a directory exists
    async fn ensure_directory(&self, path: &Path) -> Result<(), GenerationError>;
}

/// Serializes a materialized project directory into a single archive
pub trait Packager: Send + Sync {
    fn package(&self, root: &Path) -> Result<Vec<u8>, GenerationError>;
}
