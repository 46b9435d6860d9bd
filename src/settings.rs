//! Runtime settings
//!
//! Settings come from built-in defaults, an optional TOML file and a couple of
//! environment variables, in that order of precedence. CLI flags are applied on
//! top by the binary.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides `storage_dir`
pub const OUTPUT_DIR_ENV: &str = "MCP_FORGE_OUTPUT_DIR";
/// Overrides `template_dir`
pub const TEMPLATE_DIR_ENV: &str = "MCP_FORGE_TEMPLATE_DIR";

/// Errors raised while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSettings {
    /// Address to bind to
    pub bind: String,
    pub port: u16,
    /// Largest accepted request body
    pub body_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

/// Complete settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Root directory for generate-to-storage
    pub storage_dir: PathBuf,
    /// Parent of download scratch directories; OS temp dir when unset
    pub scratch_dir: Option<PathBuf>,
    /// Directory of `*.tera` files replacing the embedded templates
    pub template_dir: Option<PathBuf>,
    pub server: ServerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("generated-servers"),
            scratch_dir: None,
            template_dir: None,
            server: ServerSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from an optional TOML file, then apply the environment
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_env_overrides(|key| std::env::var_os(key));
        Ok(settings)
    }

    /// Parse a TOML settings file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides through `lookup`; empty values are ignored
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(dir) = non_empty(OUTPUT_DIR_ENV) {
            self.storage_dir = PathBuf::from(dir);
        }
        if let Some(dir) = non_empty(TEMPLATE_DIR_ENV) {
            self.template_dir = Some(PathBuf::from(dir));
        }
    }
}
