//! Root server configuration

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::{ResourceConfig, ToolConfig};

/// Transport wiring emitted into the generated entry point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerType {
    #[default]
    #[serde(rename = "STDIO", alias = "stdio")]
    Stdio,
    #[serde(rename = "HTTP", alias = "http")]
    Http,
}

impl ServerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerType::Stdio => "STDIO",
            ServerType::Http => "HTTP",
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of the server project to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Display name, npm package seed and storage directory name
    pub server_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub server_type: ServerType,
    #[serde(default)]
    pub tools: Vec<ToolConfig>,
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl ServerConfig {
    /// Create a configuration with no tools or resources
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            description: String::new(),
            version: default_version(),
            server_type: ServerType::default(),
            tools: Vec::new(),
            resources: Vec::new(),
        }
    }

    pub fn with_tool(mut self, tool: ToolConfig) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn with_resource(mut self, resource: ResourceConfig) -> Self {
        self.resources.push(resource);
        self
    }

    /// Name of the archive offered for download
    pub fn archive_file_name(&self) -> String {
        format!("{}.zip", self.server_name)
    }
}
