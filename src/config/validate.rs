//! Config validation logic.
//! Both roots must already exist as directories; they are never created here.
//! On success the roots are replaced by their canonical absolute form.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::SorterError;

use super::types::Config;

impl Config {
    /// Validate existence and readability of both roots without modifying `self`.
    pub fn validate(&self) -> Result<(), SorterError> {
        ensure_dir_exists_and_is_dir(&self.input_root, "input_root")?;
        ensure_readable(&self.input_root, "input_root")?;
        ensure_dir_exists_and_is_dir(&self.output_root, "output_root")?;
        Ok(())
    }
}

/// Validate the config and canonicalize both roots in place.
pub fn validate_and_normalize(cfg: &mut Config) -> Result<(), SorterError> {
    cfg.validate()?;
    cfg.input_root = canonical(&cfg.input_root, "input_root")?;
    cfg.output_root = canonical(&cfg.output_root, "output_root")?;

    info!(
        "Config validated: input='{}' output='{}' pattern='{}' dry_run={}",
        cfg.input_root.display(),
        cfg.output_root.display(),
        cfg.pattern,
        cfg.dry_run
    );
    Ok(())
}

/// Ensure path exists and is a directory.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &'static str) -> Result<(), SorterError> {
    if !path.exists() {
        return Err(SorterError::RootNotFound {
            name,
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(SorterError::RootNotDirectory {
            name,
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Ensure directory is readable by attempting to open its entries.
fn ensure_readable(path: &Path, name: &'static str) -> Result<(), SorterError> {
    fs::read_dir(path).map_err(|source| SorterError::RootUnreadable {
        name,
        path: path.to_path_buf(),
        source,
    })?;
    debug!("{name} readable: {}", path.display());
    Ok(())
}

// dunce avoids \\?\ prefixes on Windows.
fn canonical(path: &Path, name: &'static str) -> Result<PathBuf, SorterError> {
    dunce::canonicalize(path).map_err(|source| SorterError::RootUnreadable {
        name,
        path: path.to_path_buf(),
        source,
    })
}
