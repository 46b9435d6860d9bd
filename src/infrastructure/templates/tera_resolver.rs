//! Tera-based template resolver

use std::error::Error as StdError;
use std::path::Path;
use tera::Tera;
use tracing::debug;

use crate::generation::{GenerationError, RenderContext, TemplateId, TemplateResolver};
use crate::infrastructure::templates::embedded_sources;

/// Resolves scaffold templates through a private Tera instance
///
/// Templates are registered under their [`TemplateId`] names. Autoescaping is
/// disabled: the output is source code, and user strings reach code positions
/// only through `json_encode()`.
pub struct TeraTemplateResolver {
    tera: Tera,
}

impl TeraTemplateResolver {
    /// Resolver over the templates embedded in the binary
    pub fn new() -> Result<Self, GenerationError> {
        Self::from_sources(embedded_sources())
    }

    /// Resolver over arbitrary template sources
    pub fn from_sources<I, S>(sources: I) -> Result<Self, GenerationError>
    where
        I: IntoIterator<Item = (TemplateId, S)>,
        S: AsRef<str>,
    {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        for (template, source) in sources {
            tera.add_raw_template(template.as_str(), source.as_ref())
                .map_err(|e| {
                    GenerationError::template(format!(
                        "Failed to add template '{template}': {}",
                        describe(&e)
                    ))
                })?;
        }

        Ok(Self { tera })
    }

    /// Resolver over the `*.tera` files of an override directory.
    ///
    /// Files that are absent leave their template unresolved; rendering such a
    /// template fails with a template error.
    pub fn from_dir(dir: &Path) -> Result<Self, GenerationError> {
        if !dir.is_dir() {
            return Err(GenerationError::template(format!(
                "Template directory {} does not exist",
                dir.display()
            )));
        }

        let mut sources = Vec::new();
        for template in TemplateId::all() {
            let path = dir.join(template.source_file_name());
            if !path.is_file() {
                debug!(template = %template, path = %path.display(), "Template file not found, leaving unresolved");
                continue;
            }
            let source = std::fs::read_to_string(&path).map_err(|e| {
                GenerationError::template(format!("Failed to read template {}: {e}", path.display()))
            })?;
            sources.push((template, source));
        }

        debug!(dir = %dir.display(), count = sources.len(), "Loaded templates from directory");
        Self::from_sources(sources)
    }
}

impl TemplateResolver for TeraTemplateResolver {
    fn render(&self, template: TemplateId, context: &RenderContext) -> Result<String, GenerationError> {
        if !self.has_template(template) {
            return Err(GenerationError::template(format!("Template '{template}' not found")));
        }

        self.tera
            .render(template.as_str(), &context.to_tera_context())
            .map_err(|e| {
                GenerationError::template(format!(
                    "Failed to render template '{template}': {}",
                    describe(&e)
                ))
            })
    }

    fn has_template(&self, template: TemplateId) -> bool {
        self.tera
            .get_template_names()
            .any(|name| name == template.as_str())
    }
}

/// Tera keeps the useful detail in the source chain
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
