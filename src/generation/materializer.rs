//! Materializer - renders artifacts and commits them to a sink

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::generation::{
    Artifact, ArtifactSpec, GenerationError, OutputService, RenderContext, TemplateResolver,
    artifacts::{artifact_set, server_entry},
};
use crate::model::ServerConfig;

/// Renders the artifact set of a configuration and writes it out
#[derive(Clone)]
pub struct Materializer {
    resolver: Arc<dyn TemplateResolver>,
    output: Arc<dyn OutputService>,
}

impl Materializer {
    pub fn new(resolver: Arc<dyn TemplateResolver>, output: Arc<dyn OutputService>) -> Self {
        Self { resolver, output }
    }

    /// Render a single artifact
    pub fn render(&self, spec: ArtifactSpec, context: &RenderContext) -> Result<Artifact, GenerationError> {
        debug!(template = %spec.template, path = spec.path, "Rendering artifact");
        let content = self.resolver.render(spec.template, context)?;
        Ok(Artifact {
            path: PathBuf::from(spec.path),
            content,
        })
    }

    /// Render every artifact of the project; all of them or an error
    pub fn render_all(&self, config: &ServerConfig) -> Result<Vec<Artifact>, GenerationError> {
        let context = RenderContext::for_server(config)?;
        artifact_set(config)
            .iter()
            .map(|spec| self.render(*spec, &context))
            .collect()
    }

    /// Render the entry point only, without touching any sink
    pub fn render_preview(&self, config: &ServerConfig) -> Result<String, GenerationError> {
        let context = RenderContext::for_server(config)?;
        Ok(self.render(server_entry(), &context)?.content)
    }

    /// Write already rendered artifacts below `root`
    pub async fn write(&self, root: &Path, artifacts: &[Artifact]) -> Result<(), GenerationError> {
        self.output.ensure_directory(root).await?;
        self.output.write_artifacts(root, artifacts).await
    }

    /// Directory mode: render everything, then write it below `root`
    pub async fn materialize(&self, config: &ServerConfig, root: &Path) -> Result<Vec<Artifact>, GenerationError> {
        let artifacts = self.render_all(config)?;
        self.write(root, &artifacts).await?;
        Ok(artifacts)
    }
}
