//! Render context - the model handed to every template

use serde_json::{Value as JsonValue, json};
use std::collections::BTreeMap;

use crate::generation::{GenerationError, utils::to_kebab_case};
use crate::model::{ServerConfig, ServerType};

/// Render context used for template rendering
///
/// Variables are kept in a sorted map so that the context, and therefore the
/// rendered output, never depends on insertion or hashing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    pub variables: BTreeMap<String, JsonValue>,
}

impl RenderContext {
    /// Create an empty render context
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the standard model for a server configuration
    ///
    /// Templates see the configuration under `config` (camelCase keys, as on the
    /// wire) plus a few derived values.
    pub fn for_server(config: &ServerConfig) -> Result<Self, GenerationError> {
        let mut context = Self::new();
        context.add_variable("config", serde_json::to_value(config)?);
        context.add_variable("package_name", json!(to_kebab_case(&config.server_name)));
        context.add_variable("is_http", json!(config.server_type == ServerType::Http));
        Ok(context)
    }

    /// Add a variable to the render context
    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.variables.insert(key.to_string(), value);
    }

    /// Convert into a Tera context
    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.variables {
            context.insert(key.as_str(), value);
        }
        context
    }
}
