//! CLI definition and parsing.
//!
//! Notes:
//! - `--in` and `--out` are required; both roots must already exist.
//! - `--help` and every parse error exit with `USAGE_EXIT_CODE`, so scripts
//!   never mistake a usage screen for a successful run.
//! - --debug is a shorthand for --log-level debug.

use clap::{CommandFactory, Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, FilePattern, LogLevel};

/// Exit status for usage and configuration errors (including `--help`).
pub const USAGE_EXIT_CODE: u8 = 1;

/// Sort date-stamped images into per-date directories.
/// CLI flags override values from the optional XML config file.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sort date-stamped images (\"2020-04-10 00.07.15.jpg\") into per-date directories"
)]
pub struct Args {
    /// Directory scanned (recursively) for images.
    #[arg(long = "in", value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub input: PathBuf,

    /// Directory receiving one subdirectory per date.
    #[arg(long = "out", value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub output: PathBuf,

    /// Dry-run: log actions but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be moved, but do not create directories or move files"
    )]
    pub dry_run: bool,

    /// Extension of the files to sort (default: jpg).
    #[arg(long, value_name = "EXT", help = "File extension to sort (default: jpg)")]
    pub extension: Option<String>,

    /// Match the extension case-insensitively.
    #[arg(long, help = "Match the extension case-insensitively (jpg, JPG, Jpg)")]
    pub ignore_case: bool,

    /// Number of worker threads used for moves. 1 = sequential.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..), help = "Move with N worker threads (default: 1, sequential)")]
    pub jobs: Option<u16>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI values to a Config (in-place). No-ops for unset optional flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        cfg.input_root = self.input.clone();
        cfg.output_root = self.output.clone();
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.extension.is_some() || self.ignore_case {
            let ext = self
                .extension
                .clone()
                .unwrap_or_else(|| cfg.pattern.extension().to_string());
            let case_sensitive = !self.ignore_case && cfg.pattern.case_sensitive();
            cfg.pattern = FilePattern::new(&ext, case_sensitive);
        }
        if let Some(jobs) = self.jobs {
            cfg.jobs = usize::from(jobs);
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = Some(path.clone());
        }
    }
}

/// Parse the process arguments; `Err` carries clap's rendered message
/// (help, version or a parse error).
pub fn try_parse() -> Result<Args, clap::Error> {
    Args::try_parse()
}

/// Short usage line, shown after configuration errors.
pub fn usage() -> String {
    Args::command().render_usage().to_string()
}
