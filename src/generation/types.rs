//! Core types for the generation domain

use std::fmt;
use std::path::PathBuf;

/// Identifier of one of the scaffold templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateId {
    PackageManifest,
    TsProjectConfig,
    ServerEntry,
    Readme,
}

impl TemplateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::PackageManifest => "package-manifest",
            TemplateId::TsProjectConfig => "ts-project-config",
            TemplateId::ServerEntry => "server-entry",
            TemplateId::Readme => "readme",
        }
    }

    /// File name of the template source inside a template directory
    pub fn source_file_name(&self) -> &'static str {
        match self {
            TemplateId::PackageManifest => "package.json.tera",
            TemplateId::TsProjectConfig => "tsconfig.json.tera",
            TemplateId::ServerEntry => "index.ts.tera",
            TemplateId::Readme => "README.md.tera",
        }
    }

    pub fn all() -> [TemplateId; 4] {
        [
            TemplateId::PackageManifest,
            TemplateId::TsProjectConfig,
            TemplateId::ServerEntry,
            TemplateId::Readme,
        ]
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binding of a project-relative output path to the template that produces it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub path: &'static str,
    pub template: TemplateId,
}

/// Generated artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Path relative to the project root
    pub path: PathBuf,
    pub content: String,
}
