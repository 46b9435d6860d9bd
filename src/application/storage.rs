//! Storage root bookkeeping: per-name locks and atomic promotion

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::fs;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::generation::GenerationError;

pub const STAGING_PREFIX: &str = ".staging-";
pub const BACKUP_PREFIX: &str = ".previous-";

/// Registry of async locks keyed by server name.
///
/// Generations targeting the same project directory run one after another;
/// different names proceed independently. Keys are ASCII case-folded so names
/// that collide on case-insensitive filesystems share a lock. Entries nobody
/// holds or waits on are pruned on every acquisition.
#[derive(Debug, Clone, Default)]
pub struct StorageLocks {
    locks: Arc<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>>,
}

impl StorageLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `name`
    pub async fn acquire(&self, name: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(name.to_ascii_lowercase()).or_default().clone()
        };
        lock.lock_owned().await
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.locks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Fresh staging directory inside the storage root.
///
/// The name is fixed-length so it stays within filesystem limits whatever the
/// server name.
pub fn create_staging(storage_root: &Path) -> Result<TempDir, GenerationError> {
    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(storage_root)
        .map_err(|e| {
            GenerationError::output(format!(
                "Failed to create staging directory in {}: {}",
                storage_root.display(),
                e
            ))
        })?;

    // Staging dirs are private; the promoted project should not be
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(staging.path(), std::fs::Permissions::from_mode(0o755)).map_err(
            |e| {
                GenerationError::output(format!(
                    "Failed to set permissions on {}: {}",
                    staging.path().display(),
                    e
                ))
            },
        )?;
    }

    Ok(staging)
}

/// A previous project moved aside during promotion.
///
/// Unless [`Backup::discard`] is called, dropping the guard puts the project
/// back at its target, so a cancelled promotion leaves the old project in
/// place.
struct Backup {
    path: PathBuf,
    target: PathBuf,
    armed: bool,
}

impl Backup {
    /// Move `target` aside to a hidden sibling
    async fn move_aside(target: &Path) -> Result<Self, GenerationError> {
        let path = backup_path(target);
        fs::rename(target, &path).await.map_err(|e| {
            GenerationError::output(format!("Failed to move {} aside: {}", target.display(), e))
        })?;
        debug!(target = %target.display(), backup = %path.display(), "Moved previous project aside");
        Ok(Self {
            path,
            target: target.to_path_buf(),
            armed: true,
        })
    }

    /// Remove the backup once the new project is in place
    async fn discard(mut self) {
        self.armed = false;
        if let Err(e) = fs::remove_dir_all(&self.path).await {
            warn!(backup = %self.path.display(), error = %e, "Failed to remove previous project");
        }
    }

    fn restore(&mut self) {
        self.armed = false;
        if let Err(e) = std::fs::rename(&self.path, &self.target) {
            warn!(
                backup = %self.path.display(),
                target = %self.target.display(),
                error = %e,
                "Failed to restore previous project"
            );
        }
    }
}

impl Drop for Backup {
    fn drop(&mut self) {
        if self.armed {
            self.restore();
        }
    }
}

/// Swap a fully written staging directory into place at `target`.
///
/// An existing directory at `target` is moved aside first and removed once the
/// new one is in place. If the swap fails or is cancelled the previous
/// directory is restored.
pub async fn promote(staging: TempDir, target: &Path) -> Result<(), GenerationError> {
    let backup = if fs::try_exists(target).await? {
        Some(Backup::move_aside(target).await?)
    } else {
        None
    };

    if let Err(e) = fs::rename(staging.path(), target).await {
        // Dropping the backup guard restores the previous project
        drop(backup);
        return Err(GenerationError::output(format!(
            "Failed to move {} to {}: {}",
            staging.path().display(),
            target.display(),
            e
        )));
    }

    // Nothing left at the staging path; dropping the guard is a no-op
    drop(staging);

    if let Some(backup) = backup {
        backup.discard().await;
    }

    Ok(())
}

fn backup_path(target: &Path) -> PathBuf {
    target.with_file_name(format!("{BACKUP_PREFIX}{}", Uuid::new_v4()))
}
