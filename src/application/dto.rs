//! Results returned by the generation facade

use std::path::PathBuf;

/// Outcome of generating a project into the storage root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResponse {
    /// Absolute path of the generated project directory
    pub location: PathBuf,
}

/// Rendered entry point of a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewResponse {
    pub text: String,
}

/// A packaged project ready to be handed out as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArchive {
    pub bytes: Vec<u8>,
    pub filename: String,
}
