//! Typed error definitions for date_sorter.
//! Every failure mode of a sort run maps to one variant so the app layer can log
//! a stable code and decide whether to show usage text.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SorterError {
    #[error("{name} does not exist: {path}")]
    RootNotFound { name: &'static str, path: PathBuf },

    #[error("{name} is not a directory: {path}")]
    RootNotDirectory { name: &'static str, path: PathBuf },

    #[error("Cannot read {name} directory '{path}': {source}")]
    RootUnreadable {
        name: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to enumerate files under '{path}': {source}")]
    Discovery {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("File name is not valid UTF-8: {0}")]
    InvalidFileName(PathBuf),

    #[error("{message}")]
    CreateDir {
        path: PathBuf,
        message: String,
        source: io::Error,
    },

    #[error("{message}")]
    Move {
        src: PathBuf,
        dest: PathBuf,
        message: String,
        source: io::Error,
    },

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(String),

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl SorterError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            SorterError::RootNotFound { .. } => 10,
            SorterError::RootNotDirectory { .. } => 11,
            SorterError::RootUnreadable { .. } => 12,
            SorterError::Discovery { .. } => 20,
            SorterError::InvalidFileName(_) => 30,
            SorterError::CreateDir { .. } => 31,
            SorterError::Move { .. } => 32,
            SorterError::WorkerPool(_) => 40,
            SorterError::Interrupted => 130,
        }
    }

    /// Short machine-friendly kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            SorterError::RootNotFound { .. } => "root_not_found",
            SorterError::RootNotDirectory { .. } => "root_not_directory",
            SorterError::RootUnreadable { .. } => "root_unreadable",
            SorterError::Discovery { .. } => "discovery",
            SorterError::InvalidFileName(_) => "invalid_file_name",
            SorterError::CreateDir { .. } => "create_dir",
            SorterError::Move { .. } => "move",
            SorterError::WorkerPool(_) => "worker_pool",
            SorterError::Interrupted => "interrupted",
        }
    }

    /// True for errors the user fixes by re-invoking with different arguments.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SorterError::RootNotFound { .. }
                | SorterError::RootNotDirectory { .. }
                | SorterError::RootUnreadable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_are_flagged() {
        let e = SorterError::RootNotFound {
            name: "input_root",
            path: PathBuf::from("/nope"),
        };
        assert!(e.is_configuration());
        assert_eq!(e.to_string(), "input_root does not exist: /nope");
        assert!(!SorterError::Interrupted.is_configuration());
    }

    #[test]
    fn codes_are_distinct() {
        let errs = [
            SorterError::InvalidFileName(PathBuf::from("x")),
            SorterError::WorkerPool("boom".into()),
            SorterError::Interrupted,
        ];
        let codes: Vec<_> = errs.iter().map(SorterError::code).collect();
        assert_eq!(codes, vec![30, 40, 130]);
    }
}
