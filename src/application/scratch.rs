//! Call-exclusive scratch directories for archive assembly

use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

pub const SCRATCH_PREFIX: &str = "mcpserver_";

/// A uniquely named temporary directory owned by a single call.
///
/// Call [`ScratchDir::release`] to remove it and observe the outcome. If the
/// guard is dropped instead, removal still happens and failures are logged.
pub struct ScratchDir {
    path: PathBuf,
    dir: Option<TempDir>,
}

impl ScratchDir {
    /// Create a scratch directory below `parent`, or the OS temp dir when `None`
    pub fn create(parent: Option<&Path>) -> io::Result<Self> {
        let dir = match parent {
            Some(parent) => {
                std::fs::create_dir_all(parent)?;
                tempfile::Builder::new()
                    .prefix(SCRATCH_PREFIX)
                    .tempdir_in(parent)?
            }
            None => tempfile::Builder::new().prefix(SCRATCH_PREFIX).tempdir()?,
        };

        let path = dir.path().to_path_buf();
        debug!(path = %path.display(), "Allocated scratch directory");
        Ok(Self {
            path,
            dir: Some(dir),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the directory and everything in it
    pub fn release(mut self) -> io::Result<()> {
        match self.dir.take() {
            Some(dir) => {
                debug!(path = %self.path.display(), "Releasing scratch directory");
                dir.close()
            }
            None => Ok(()),
        }
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Some(dir) = self.dir.take() {
            if let Err(e) = dir.close() {
                warn!(path = %self.path.display(), error = %e, "Failed to remove scratch directory");
            }
        }
    }
}
