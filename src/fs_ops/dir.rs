//! Destination directory materialization.
//! Directories are created lazily, once per distinct path, and creation is
//! idempotent: a directory that already exists (or appears concurrently) is fine.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

use crate::errors::SorterError;

use super::helpers::create_dir_error;

/// Outcome of an `ensure` call, mostly for counting and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    /// Seen earlier in this run or already on disk.
    Existing,
    /// Created by this call.
    Created,
    /// Missing; would be created outside dry-run.
    WouldCreate,
}

/// Tracks which destination directories are known to exist in this run.
/// Shared by reference across worker threads.
#[derive(Debug, Default)]
pub struct DirCache {
    known: Mutex<HashSet<PathBuf>>,
}

impl DirCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `dir` exists. In dry-run nothing is created.
    pub fn ensure(&self, dir: &Path, dry_run: bool) -> Result<DirStatus, SorterError> {
        if self.is_known(dir) {
            return Ok(DirStatus::Existing);
        }

        let status = if dir.is_dir() {
            DirStatus::Existing
        } else if dry_run {
            debug!(path = %dir.display(), "dry-run: would create directory");
            DirStatus::WouldCreate
        } else {
            // create_dir_all treats a concurrently created directory as success.
            fs::create_dir_all(dir).map_err(create_dir_error(dir))?;
            debug!(path = %dir.display(), "Created directory");
            DirStatus::Created
        };

        self.remember(dir);
        Ok(status)
    }

    fn is_known(&self, dir: &Path) -> bool {
        match self.known.lock() {
            Ok(known) => known.contains(dir),
            Err(poisoned) => poisoned.into_inner().contains(dir),
        }
    }

    fn remember(&self, dir: &Path) {
        match self.known.lock() {
            Ok(mut known) => {
                known.insert(dir.to_path_buf());
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(dir.to_path_buf());
            }
        }
    }
}
