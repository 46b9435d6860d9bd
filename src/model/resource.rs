//! Resource configuration

use serde::{Deserialize, Serialize};

/// A readable resource exposed by the generated server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceConfig {
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    /// TypeScript function body producing the resource contents
    #[serde(default)]
    pub implementation: String,
}

fn default_mime_type() -> String {
    "text/plain".to_string()
}

impl ResourceConfig {
    pub fn new(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            description: String::new(),
            mime_type: default_mime_type(),
            implementation: String::new(),
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn implemented_by(mut self, implementation: impl Into<String>) -> Self {
        self.implementation = implementation.into();
        self
    }
}
