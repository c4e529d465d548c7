//! RAII guard for the temporary iconset directory.
//!
//! Ensures the staging tree is removed on every exit path, including early
//! returns through `?` and panics.

use super::{ICONSET_DIR_NAME, IconSize};
use crate::error::{ErrorExt, Result};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Per-run staging area: `<temp-root>/<uuid>/icon.iconset`.
///
/// Dropping the guard removes the whole `<uuid>` tree. Removal errors are
/// ignored since the run's outcome is already decided by then.
#[derive(Debug)]
pub struct StagingDir {
    root: PathBuf,
    iconset: PathBuf,
}

impl StagingDir {
    /// Create a fresh staging directory under `temp_root`.
    pub async fn create(temp_root: &Path) -> Result<Self> {
        let root = temp_root.join(Uuid::new_v4().to_string());
        let iconset = root.join(ICONSET_DIR_NAME);

        // Guard exists before the directory so a partial create is still removed.
        let staging = Self { root, iconset };
        tokio::fs::create_dir_all(&staging.iconset)
            .await
            .fs_context("creating iconset directory", &staging.iconset)?;

        log::debug!("Created staging directory {}", staging.iconset.display());
        Ok(staging)
    }

    /// Unique per-run directory that is removed on drop.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `icon.iconset` directory handed to the packer.
    pub fn iconset_path(&self) -> &Path {
        &self.iconset
    }

    /// Write one encoded image as `icon_<label>.png`.
    pub async fn write_image(&self, size: &IconSize, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.iconset.join(size.file_name());
        tokio::fs::write(&path, bytes)
            .await
            .fs_context("writing icon", &path)?;
        Ok(path)
    }
}

impl Drop for StagingDir {
    fn drop(&mut self) {
        match std::fs::remove_dir_all(&self.root) {
            Ok(()) => log::debug!("Removed staging directory {}", self.root.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::debug!(
                "Ignoring failure to remove staging directory {}: {}",
                self.root.display(),
                e
            ),
        }
    }
}
