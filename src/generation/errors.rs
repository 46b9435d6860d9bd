//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification used by callers to map failures onto responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Template,
    Io,
}

impl GenerationError {
    pub fn template<S: Into<String>>(msg: S) -> Self {
        Self::Template(msg.into())
    }

    pub fn output<S: Into<String>>(msg: S) -> Self {
        Self::Output(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Validation(_) => ErrorKind::Validation,
            // The model failed to serialize into the template context
            GenerationError::Template(_) | GenerationError::Serialization(_) => ErrorKind::Template,
            GenerationError::Output(_) | GenerationError::Archive(_) | GenerationError::Io(_) => {
                ErrorKind::Io
            }
        }
    }
}

impl From<zip::result::ZipError> for GenerationError {
    fn from(e: zip::result::ZipError) -> Self {
        Self::Archive(e.to_string())
    }
}

/// Validation errors for server configurations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Server name cannot be empty")]
    EmptyServerName,

    #[error("Invalid server name '{0}': use letters, digits, '-' and '_', starting with a letter or digit")]
    InvalidServerName(String),

    #[error("Server name is longer than {max} characters")]
    ServerNameTooLong { max: usize },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Duplicate {kind} '{name}'")]
    Duplicate { kind: &'static str, name: String },
}
