//! Business rules for the generation domain

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::generation::ValidationError;
use crate::model::{ServerConfig, ToolConfig};

/// npm rejects package names longer than this
pub const MAX_SERVER_NAME_LEN: usize = 214;

static SERVER_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("server name pattern is valid"));

/// Validates a server name before it is used as a path segment or file name
pub fn validate_server_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyServerName);
    }

    if name.len() > MAX_SERVER_NAME_LEN {
        return Err(ValidationError::ServerNameTooLong {
            max: MAX_SERVER_NAME_LEN,
        });
    }

    if !SERVER_NAME_RE.is_match(name) {
        return Err(ValidationError::InvalidServerName(name.to_string()));
    }

    Ok(())
}

/// Validates a whole configuration
pub fn validate_config(config: &ServerConfig) -> Result<(), ValidationError> {
    validate_server_name(&config.server_name)?;

    if config.version.trim().is_empty() {
        return Err(ValidationError::MissingField("version".to_string()));
    }

    let mut tool_names = HashSet::new();
    for (index, tool) in config.tools.iter().enumerate() {
        if tool.name.trim().is_empty() {
            return Err(ValidationError::MissingField(format!("tools[{index}].name")));
        }
        if !tool_names.insert(tool.name.as_str()) {
            return Err(ValidationError::Duplicate {
                kind: "tool",
                name: tool.name.clone(),
            });
        }
        validate_parameters(index, tool)?;
    }

    let mut resource_uris = HashSet::new();
    for (index, resource) in config.resources.iter().enumerate() {
        if resource.uri.trim().is_empty() {
            return Err(ValidationError::MissingField(format!("resources[{index}].uri")));
        }
        if resource.name.trim().is_empty() {
            return Err(ValidationError::MissingField(format!("resources[{index}].name")));
        }
        if !resource_uris.insert(resource.uri.as_str()) {
            return Err(ValidationError::Duplicate {
                kind: "resource uri",
                name: resource.uri.clone(),
            });
        }
    }

    Ok(())
}

fn validate_parameters(tool_index: usize, tool: &ToolConfig) -> Result<(), ValidationError> {
    let mut names = HashSet::new();
    for (index, param) in tool.parameters.iter().enumerate() {
        if param.name.trim().is_empty() {
            return Err(ValidationError::MissingField(format!(
                "tools[{tool_index}].parameters[{index}].name"
            )));
        }
        if !names.insert(param.name.as_str()) {
            return Err(ValidationError::Duplicate {
                kind: "parameter",
                name: format!("{}.{}", tool.name, param.name),
            });
        }
    }
    Ok(())
}
