//! The fixed artifact set of a generated project

use crate::generation::{ArtifactSpec, TemplateId};
use crate::model::ServerConfig;

/// Relative path of the generated entry point
pub const SERVER_ENTRY_PATH: &str = "index.ts";

const ARTIFACTS: [ArtifactSpec; 4] = [
    ArtifactSpec {
        path: "package.json",
        template: TemplateId::PackageManifest,
    },
    ArtifactSpec {
        path: "tsconfig.json",
        template: TemplateId::TsProjectConfig,
    },
    ArtifactSpec {
        path: SERVER_ENTRY_PATH,
        template: TemplateId::ServerEntry,
    },
    ArtifactSpec {
        path: "README.md",
        template: TemplateId::Readme,
    },
];

/// Artifacts that make up a project for `config`.
///
/// The set never varies with the number of tools or resources; templates branch
/// on the configuration instead.
pub fn artifact_set(_config: &ServerConfig) -> &'static [ArtifactSpec] {
    &ARTIFACTS
}

/// The entry point artifact, the only one rendered for previews
pub fn server_entry() -> ArtifactSpec {
    ARTIFACTS[2]
}
