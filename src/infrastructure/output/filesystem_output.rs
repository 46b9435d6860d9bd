//! Filesystem-based output service implementation

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::generation::{Artifact, GenerationError, OutputService};

/// Output service that writes artifacts to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn write_artifacts(&self, root: &Path, artifacts: &[Artifact]) -> Result<(), GenerationError> {
        for artifact in artifacts {
            let path = resolve(root, &artifact.path)?;

            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    GenerationError::output(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }

            // Truncates an existing file
            let mut file = fs::File::create(&path).await.map_err(|e| {
                GenerationError::output(format!("Failed to create file {}: {}", path.display(), e))
            })?;

            file.write_all(artifact.content.as_bytes())
                .await
                .map_err(|e| {
                    GenerationError::output(format!("Failed to write file {}: {}", path.display(), e))
                })?;

            file.flush().await.map_err(|e| {
                GenerationError::output(format!("Failed to flush file {}: {}", path.display(), e))
            })?;

            debug!(path = %path.display(), bytes = artifact.content.len(), "Wrote artifact");
        }

        Ok(())
    }

    async fn ensure_directory(&self, path: &Path) -> Result<(), GenerationError> {
        fs::create_dir_all(path).await.map_err(|e| {
            GenerationError::output(format!(
                "Failed to create directory {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}

/// Join an artifact path onto the root, refusing anything that could escape it
fn resolve(root: &Path, relative: &Path) -> Result<PathBuf, GenerationError> {
    let is_contained = relative.components().next().is_some()
        && relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

    if !is_contained {
        return Err(GenerationError::output(format!(
            "Artifact path {} must be relative to the project root",
            relative.display()
        )));
    }

    Ok(root.join(relative))
}
