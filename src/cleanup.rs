use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Removes a scratch directory when dropped, however the owning scope is
/// left.  Failing to remove it is only worth a warning.
pub struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    /// Arms a guard for `path`.  The directory does not need to exist yet.
    pub fn new<P: Into<PathBuf>>(path: P) -> TempDirGuard {
        TempDirGuard { path: path.into() }
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        match fs::remove_dir_all(&self.path) {
            Ok(()) => {
                info!("🧹 Cleaned up temporary files in {}", self.path.display())
            }
            Err(err) => {
                warn!("⚠️  Could not clean up temp files in {}: {}",
                      self.path.display(),
                      err)
            }
        }
    }
}
