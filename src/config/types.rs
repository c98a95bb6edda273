//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - FilePattern decides which files are discovered.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::{DEFAULT_EXTENSION, DEFAULT_JOBS};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// One line per file (default)
    #[default]
    Normal,
    /// Adds directory creation and discovery details
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Which files are candidates: a single extension, matched on the final
/// `.`-separated component of the file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePattern {
    extension: String,
    case_sensitive: bool,
}

impl Default for FilePattern {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION, true)
    }
}

impl FilePattern {
    /// A leading dot is accepted and dropped (`".jpg"` == `"jpg"`).
    pub fn new(extension: &str, case_sensitive: bool) -> Self {
        Self {
            extension: extension.trim().trim_start_matches('.').to_string(),
            case_sensitive,
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// True if `path` ends in `.<extension>`.
    pub fn matches(&self, path: &Path) -> bool {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) if self.case_sensitive => ext == self.extension,
            Some(ext) => ext.eq_ignore_ascii_case(&self.extension),
            None => false,
        }
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**/*.{}", self.extension)?;
        if !self.case_sensitive {
            f.write_str(" (ignore case)")?;
        }
        Ok(())
    }
}

/// Runtime configuration handed to the sorter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tree scanned for candidate files
    pub input_root: PathBuf,
    /// Per-date directories are created under this root
    pub output_root: PathBuf,
    /// If true, log actions but do not modify the filesystem
    pub dry_run: bool,
    /// Which files are discovered
    pub pattern: FilePattern,
    /// Worker threads for moves; 1 keeps the run strictly sequential
    pub jobs: usize,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_root: PathBuf::new(),
            output_root: PathBuf::new(),
            dry_run: false,
            pattern: FilePattern::default(),
            jobs: DEFAULT_JOBS,
            log_level: LogLevel::Normal,
            log_file: None,
        }
    }
}

impl Config {
    /// Construct a Config with explicit roots; other fields use defaults.
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            ..Default::default()
        }
    }

    /// Builder-style dry-run toggle, handy in tests.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_is_case_sensitive_jpg() {
        let p = FilePattern::default();
        assert!(p.matches(Path::new("/in/2020-04-10 00.07.15.jpg")));
        assert!(!p.matches(Path::new("/in/2020-04-10 00.07.15.JPG")));
        assert!(!p.matches(Path::new("/in/2020-04-10 00.07.15.png")));
        assert!(!p.matches(Path::new("/in/jpg")));
    }

    #[test]
    fn ignore_case_pattern_and_leading_dot() {
        let p = FilePattern::new(".jpg", false);
        assert_eq!(p.extension(), "jpg");
        assert!(p.matches(Path::new("a.JPG")));
        assert!(p.matches(Path::new("a.Jpg")));
        assert_eq!(p.to_string(), "**/*.jpg (ignore case)");
    }

    #[test]
    fn log_level_parse_aliases() {
        assert_eq!("ERROR".parse::<LogLevel>().unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
