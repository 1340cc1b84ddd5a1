//! Writable-log-directory resolution
//!
//! Where the diagnostic file lands is a platform concern: on mobile targets it
//! is the public downloads area so a customer can pull the file off the device
//! without tooling. Resolution sits behind the [`LogDir`] capability so the
//! logger itself stays platform-agnostic and tests can point it at a tempdir.
//!
//! Resolution failure is an ordinary error here; the logger swallows it as
//! part of its best-effort file contract.

use crate::error::{CioError, Result};
use std::path::PathBuf;

/// Capability to resolve a directory the logger may append into
pub trait LogDir: Send + Sync {
    fn resolve(&self) -> Result<PathBuf>;
}

/// Platform public-downloads equivalent, with fallbacks for headless targets
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadsDir;

impl LogDir for DownloadsDir {
    fn resolve(&self) -> Result<PathBuf> {
        dirs::download_dir()
            .or_else(dirs::data_local_dir)
            .or_else(|| Some(std::env::temp_dir()))
            .ok_or_else(|| CioError::storage("No writable log directory available"))
    }
}

/// Fixed directory, used for the configured override and in tests.
///
/// The directory is not created here; a missing directory is one of the
/// failure modes the logger tolerates silently.
#[derive(Debug, Clone)]
pub struct FixedDir(pub PathBuf);

impl LogDir for FixedDir {
    fn resolve(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}
