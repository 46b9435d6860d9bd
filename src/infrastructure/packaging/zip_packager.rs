//! Zip packager for materialized project directories

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Component, Path};
use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::generation::{GenerationError, Packager};

/// Serializes every regular file below a root into an in-memory zip archive
///
/// Entries are deflated, keyed by their `/`-separated path relative to the
/// root, and stamped with the zip epoch so identical trees produce identical
/// bytes.
#[derive(Debug, Clone)]
pub struct ZipPackager {
    options: SimpleFileOptions,
}

impl ZipPackager {
    pub fn new() -> Self {
        Self {
            options: SimpleFileOptions::default()
                .compression_method(CompressionMethod::Deflated)
                .last_modified_time(DateTime::default()),
        }
    }
}

impl Default for ZipPackager {
    fn default() -> Self {
        Self::new()
    }
}

impl Packager for ZipPackager {
    fn package(&self, root: &Path) -> Result<Vec<u8>, GenerationError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let mut entries = 0usize;

        for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                GenerationError::Archive(format!("Failed to walk {}: {}", root.display(), e))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(root).map_err(|e| {
                GenerationError::Archive(format!("{} is outside {}: {}", entry.path().display(), root.display(), e))
            })?;
            let name = entry_name(relative)?;
            let data = fs::read(entry.path()).map_err(|e| {
                GenerationError::Archive(format!("Failed to read {}: {}", entry.path().display(), e))
            })?;

            debug!(entry = %name, bytes = data.len(), "Adding archive entry");
            writer.start_file(name, self.options)?;
            writer.write_all(&data)?;
            entries += 1;
        }

        let bytes = writer.finish()?.into_inner();
        debug!(root = %root.display(), entries, bytes = bytes.len(), "Archive complete");
        Ok(bytes)
    }
}

/// Archive entry name: relative components joined with `/`
fn entry_name(relative: &Path) -> Result<String, GenerationError> {
    let mut parts = Vec::new();
    for component in relative.components() {
        let Component::Normal(part) = component else {
            return Err(GenerationError::Archive(format!(
                "Unexpected path component in {}",
                relative.display()
            )));
        };
        let part = part.to_str().ok_or_else(|| {
            GenerationError::Archive(format!("Non UTF-8 file name: {}", relative.display()))
        })?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}
