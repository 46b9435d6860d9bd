//! Generation facade: generate to storage, preview, and download

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{info, instrument, warn};

use crate::application::{
    DownloadArchive, GenerateResponse, PreviewResponse, ScratchDir, StorageLocks, create_staging,
    promote,
};
use crate::generation::{
    Artifact, GenerationError, Materializer, Packager, TemplateResolver, rules::validate_config,
};
use crate::infrastructure::{FileSystemOutputService, TeraTemplateResolver, ZipPackager};
use crate::model::ServerConfig;
use crate::settings::Settings;

/// Composes validation, rendering, output and packaging into the three
/// public generation operations
#[derive(Clone)]
pub struct GeneratorService {
    materializer: Materializer,
    packager: Arc<dyn Packager>,
    storage_root: PathBuf,
    scratch_root: Option<PathBuf>,
    locks: StorageLocks,
}

impl GeneratorService {
    pub fn new(resolver: Arc<dyn TemplateResolver>, storage_root: impl Into<PathBuf>) -> Self {
        Self {
            materializer: Materializer::new(resolver, Arc::new(FileSystemOutputService::new())),
            packager: Arc::new(ZipPackager::new()),
            storage_root: storage_root.into(),
            scratch_root: None,
            locks: StorageLocks::new(),
        }
    }

    /// Service wired from settings: embedded templates unless an override
    /// directory is configured
    pub fn from_settings(settings: &Settings) -> Result<Self, GenerationError> {
        let resolver = match &settings.template_dir {
            Some(dir) => TeraTemplateResolver::from_dir(dir)?,
            None => TeraTemplateResolver::new()?,
        };

        let mut service = Self::new(Arc::new(resolver), &settings.storage_dir);
        if let Some(scratch_dir) = &settings.scratch_dir {
            service = service.with_scratch_root(scratch_dir);
        }
        Ok(service)
    }

    /// Parent for download scratch directories (defaults to the OS temp dir)
    pub fn with_scratch_root(mut self, scratch_root: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(scratch_root.into());
        self
    }

    pub fn with_packager(mut self, packager: Arc<dyn Packager>) -> Self {
        self.packager = packager;
        self
    }

    /// Generate the project into `<storage_root>/<serverName>`
    #[instrument(skip_all, fields(server = %config.server_name))]
    pub async fn generate(&self, config: &ServerConfig) -> Result<GenerateResponse, GenerationError> {
        validate_config(config)?;
        let artifacts = self.materializer.render_all(config)?;

        fs::create_dir_all(&self.storage_root).await.map_err(|e| {
            GenerationError::output(format!(
                "Failed to create storage directory {}: {}",
                self.storage_root.display(),
                e
            ))
        })?;

        let _guard = self.locks.acquire(&config.server_name).await;

        let staging = create_staging(&self.storage_root)?;
        self.materializer.write(staging.path(), &artifacts).await?;

        let target = self.storage_root.join(&config.server_name);
        promote(staging, &target).await?;

        let location = fs::canonicalize(&target).await?;
        info!(location = %location.display(), artifacts = artifacts.len(), "Generated server");
        Ok(GenerateResponse { location })
    }

    /// Render the entry point without touching the filesystem
    #[instrument(skip_all, fields(server = %config.server_name))]
    pub async fn preview(&self, config: &ServerConfig) -> Result<PreviewResponse, GenerationError> {
        validate_config(config)?;
        let text = self.materializer.render_preview(config)?;
        info!(bytes = text.len(), "Rendered preview");
        Ok(PreviewResponse { text })
    }

    /// Generate the project into a scratch directory and package it
    #[instrument(skip_all, fields(server = %config.server_name))]
    pub async fn download_archive(&self, config: &ServerConfig) -> Result<DownloadArchive, GenerationError> {
        validate_config(config)?;
        let artifacts = self.materializer.render_all(config)?;

        let scratch = ScratchDir::create(self.scratch_root.as_deref()).map_err(|e| {
            GenerationError::output(format!("Failed to create scratch directory: {e}"))
        })?;
        let scratch_path = scratch.path().to_path_buf();

        match self.package(&scratch_path, &artifacts).await {
            Ok(bytes) => {
                scratch.release().map_err(|e| {
                    GenerationError::output(format!(
                        "Failed to remove scratch directory {}: {}",
                        scratch_path.display(),
                        e
                    ))
                })?;
                info!(bytes = bytes.len(), "Packaged server");
                Ok(DownloadArchive {
                    bytes,
                    filename: config.archive_file_name(),
                })
            }
            Err(error) => {
                if let Err(e) = scratch.release() {
                    warn!(path = %scratch_path.display(), error = %e, "Failed to remove scratch directory");
                }
                Err(error)
            }
        }
    }

    async fn package(&self, root: &Path, artifacts: &[Artifact]) -> Result<Vec<u8>, GenerationError> {
        self.materializer.write(root, artifacts).await?;

        let packager = Arc::clone(&self.packager);
        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || packager.package(&root))
            .await
            .map_err(|e| GenerationError::Archive(format!("Archive task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{RenderContext, TemplateId, ValidationError};
    use crate::model::ToolConfig;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    struct FailingPackager;

    impl Packager for FailingPackager {
        fn package(&self, _root: &Path) -> Result<Vec<u8>, GenerationError> {
            Err(GenerationError::Archive("disk on fire".to_string()))
        }
    }

    /// Embedded templates except the readme
    struct WithoutReadme(TeraTemplateResolver);

    impl TemplateResolver for WithoutReadme {
        fn render(&self, template: TemplateId, context: &RenderContext) -> Result<String, GenerationError> {
            if template == TemplateId::Readme {
                return Err(GenerationError::template("Template 'readme' not found"));
            }
            self.0.render(template, context)
        }

        fn has_template(&self, template: TemplateId) -> bool {
            template != TemplateId::Readme
        }
    }

    fn service(storage: &TempDir, scratch: &TempDir) -> GeneratorService {
        let resolver = Arc::new(TeraTemplateResolver::new().unwrap());
        GeneratorService::new(resolver, storage.path().join("generated-servers"))
            .with_scratch_root(scratch.path())
    }

    fn dirs() -> (TempDir, TempDir) {
        (
            TempDir::new().expect("Failed to create temp dir"),
            TempDir::new().expect("Failed to create temp dir"),
        )
    }

    #[tokio::test]
    #[traced_test]
    async fn test_generate_writes_project() {
        let (storage, scratch) = dirs();
        let service = service(&storage, &scratch);
        let config = ServerConfig::new("demo").with_tool(ToolConfig::new("ping").implemented_by("return 'pong';"));

        let response = service.generate(&config).await.unwrap();

        assert!(response.location.is_absolute());
        assert!(response.location.ends_with("generated-servers/demo"));
        for file in ["package.json", "tsconfig.json", "index.ts", "README.md"] {
            assert!(response.location.join(file).is_file(), "{file} missing");
        }
        assert!(logs_contain("Generated server"));
    }

    #[tokio::test]
    async fn test_regenerate_replaces_project() {
        let (storage, scratch) = dirs();
        let service = service(&storage, &scratch);

        let first = service.generate(&ServerConfig::new("demo")).await.unwrap();
        std::fs::write(first.location.join("notes.txt"), "left over").unwrap();

        let second = service
            .generate(&ServerConfig::new("demo").with_tool(ToolConfig::new("ping")))
            .await
            .unwrap();

        assert_eq!(first.location, second.location);
        assert!(!second.location.join("notes.txt").exists());
        let entry = std::fs::read_to_string(second.location.join("index.ts")).unwrap();
        assert!(entry.contains("\"ping\""));
    }

    #[tokio::test]
    async fn test_regenerate_longest_accepted_name() {
        let (storage, scratch) = dirs();
        let service = service(&storage, &scratch);
        let name = "n".repeat(crate::generation::rules::MAX_SERVER_NAME_LEN);

        service.generate(&ServerConfig::new(name.as_str())).await.unwrap();
        let second = service
            .generate(&ServerConfig::new(name.as_str()).with_tool(ToolConfig::new("ping")))
            .await
            .unwrap();

        assert!(second.location.ends_with(&name));
        let entry = std::fs::read_to_string(second.location.join("index.ts")).unwrap();
        assert!(entry.contains("\"ping\""));

        let root = storage.path().join("generated-servers");
        assert_eq!(std::fs::read_dir(&root).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_generations_of_one_name() {
        let (storage, scratch) = dirs();
        let service = service(&storage, &scratch);

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    let config = ServerConfig::new("shared").with_tool(ToolConfig::new(format!("tool_{i}")));
                    service.generate(&config).await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let root = storage.path().join("generated-servers");
        let entries: Vec<_> = std::fs::read_dir(&root)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["shared".to_string()]);
        assert_eq!(std::fs::read_dir(root.join("shared")).unwrap().count(), 4);
    }

    #[tokio::test]
    async fn test_invalid_name_touches_nothing() {
        let (storage, scratch) = dirs();
        let service = service(&storage, &scratch);

        let result = service.generate(&ServerConfig::new("../escape")).await;

        assert!(matches!(
            result,
            Err(GenerationError::Validation(ValidationError::InvalidServerName(_)))
        ));
        assert!(!storage.path().join("generated-servers").exists());
        assert!(!storage.path().join("escape").exists());
    }

    #[tokio::test]
    async fn test_template_failure_leaves_no_project() {
        let (storage, scratch) = dirs();
        let resolver = Arc::new(WithoutReadme(TeraTemplateResolver::new().unwrap()));
        let service = GeneratorService::new(resolver, storage.path().join("out"))
            .with_scratch_root(scratch.path());

        let result = service.generate(&ServerConfig::new("demo")).await;

        assert!(matches!(result, Err(GenerationError::Template(_))));
        assert!(!storage.path().join("out/demo").exists());
    }

    #[tokio::test]
    async fn test_preview_has_no_side_effects() {
        let (storage, scratch) = dirs();
        let service = service(&storage, &scratch);

        let preview = service.preview(&ServerConfig::new("demo")).await.unwrap();

        assert!(preview.text.contains("createServer"));
        assert!(!storage.path().join("generated-servers").exists());
        assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_from_settings_uses_template_dir() {
        let (storage, scratch) = dirs();
        let templates = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(templates.path().join("index.ts.tera"), "// custom {{ package_name }}").unwrap();

        let settings = Settings {
            storage_dir: storage.path().to_path_buf(),
            scratch_dir: Some(scratch.path().to_path_buf()),
            template_dir: Some(templates.path().to_path_buf()),
            ..Settings::default()
        };
        let service = GeneratorService::from_settings(&settings).unwrap();

        let preview = service.preview(&ServerConfig::new("My_Server")).await.unwrap();
        assert_eq!(preview.text, "// custom my-server");
        assert!(matches!(
            service.generate(&ServerConfig::new("demo")).await,
            Err(GenerationError::Template(_))
        ));
    }

    #[tokio::test]
    async fn test_download_archive_cleans_up() {
        let (storage, scratch) = dirs();
        let service = service(&storage, &scratch);

        let archive = service.download_archive(&ServerConfig::new("demo")).await.unwrap();

        assert_eq!(archive.filename, "demo.zip");
        assert!(archive.bytes.starts_with(b"PK"));
        assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    #[traced_test]
    async fn test_download_failure_cleans_up() {
        let (storage, scratch) = dirs();
        let service = service(&storage, &scratch).with_packager(Arc::new(FailingPackager));

        let result = service.download_archive(&ServerConfig::new("demo")).await;

        assert!(matches!(result, Err(GenerationError::Archive(_))));
        assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
        assert!(!logs_contain("Failed to remove scratch directory"));
    }
}
