//! Scaffold templates compiled into the binary.
//!
//! The four TypeScript scaffold templates live under
//! `templates/mcp/server/typescript/` and are included at compile time, so the
//! generator works right after `cargo install` without any template files on
//! disk. [`export_templates`] writes them back out for customisation; the
//! exported directory can then be passed as a template override directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::generation::TemplateId;

const PACKAGE_MANIFEST: &str =
    include_str!("../../../templates/mcp/server/typescript/package.json.tera");
const TS_PROJECT_CONFIG: &str =
    include_str!("../../../templates/mcp/server/typescript/tsconfig.json.tera");
const SERVER_ENTRY: &str = include_str!("../../../templates/mcp/server/typescript/index.ts.tera");
const README: &str = include_str!("../../../templates/mcp/server/typescript/README.md.tera");

/// Source text of an embedded template
pub fn embedded_source(template: TemplateId) -> &'static str {
    match template {
        TemplateId::PackageManifest => PACKAGE_MANIFEST,
        TemplateId::TsProjectConfig => TS_PROJECT_CONFIG,
        TemplateId::ServerEntry => SERVER_ENTRY,
        TemplateId::Readme => README,
    }
}

/// All embedded templates, in artifact order
pub fn embedded_sources() -> impl Iterator<Item = (TemplateId, &'static str)> {
    TemplateId::all()
        .into_iter()
        .map(|template| (template, embedded_source(template)))
}

/// Write every embedded template into `output_dir`.
///
/// Existing files with the same name are overwritten. Returns the written
/// paths in artifact order.
pub fn export_templates(output_dir: &Path) -> io::Result<Vec<PathBuf>> {
    info!(output_dir = %output_dir.display(), "Exporting embedded templates");
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();
    for (template, source) in embedded_sources() {
        let path = output_dir.join(template.source_file_name());
        debug!(template = %template, path = %path.display(), "Writing template");
        fs::write(&path, source)?;
        written.push(path);
    }

    Ok(written)
}
