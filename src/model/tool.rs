//! Tool and parameter configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON-Schema type of a tool parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    #[default]
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Number => "number",
            ParameterType::Boolean => "boolean",
            ParameterType::Object => "object",
            ParameterType::Array => "array",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named, typed input of a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterConfig {
    pub name: String,
    #[serde(rename = "type", default)]
    pub param_type: ParameterType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

impl ParameterConfig {
    pub fn new(name: impl Into<String>, param_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: false,
            description: String::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A callable capability exposed by the generated server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,
    /// TypeScript function body, spliced into the entry point as-is
    #[serde(default)]
    pub implementation: String,
}

impl ToolConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: Vec::new(),
            implementation: String::new(),
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterConfig) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn implemented_by(mut self, implementation: impl Into<String>) -> Self {
        self.implementation = implementation.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parameter_wire_format() {
        let param: ParameterConfig = serde_json::from_value(json!({
            "name": "days",
            "type": "number",
            "description": "Number of days",
            "required": true
        }))
        .unwrap();

        assert_eq!(param.name, "days");
        assert_eq!(param.param_type, ParameterType::Number);
        assert!(param.required);
        assert_eq!(param.description, "Number of days");
    }

    #[test]
    fn test_parameter_defaults() {
        let param: ParameterConfig = serde_json::from_value(json!({ "name": "q" })).unwrap();
        assert_eq!(param.param_type, ParameterType::String);
        assert!(!param.required);
        assert!(param.description.is_empty());
    }

    #[test]
    fn test_unknown_parameter_type_is_rejected() {
        let result = serde_json::from_value::<ParameterConfig>(json!({ "name": "q", "type": "date" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_tool_builder() {
        let tool = ToolConfig::new("say_hello")
            .described("Say hello")
            .with_parameter(ParameterConfig::new("name", ParameterType::String).required())
            .implemented_by("return `Hello, ${args.name}!`;");

        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["parameters"][0]["type"], "string");
        assert_eq!(value["parameters"][0]["required"], true);
        assert_eq!(value["implementation"], "return `Hello, ${args.name}!`;");
    }
}
