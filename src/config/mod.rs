//! Config module.
//! Provides configuration types, the optional XML settings file, and root validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, path_has_symlink_ancestor};
pub use types::{Config, FilePattern, LogLevel};
pub use validate::validate_and_normalize;
pub use xml::{FileSettings, load_config_from_xml, load_config_from_xml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "DATE_SORTER_CONFIG";
/// Extension matched when none is configured.
pub const DEFAULT_EXTENSION: &str = "jpg";
/// Sequential moves unless asked otherwise.
pub const DEFAULT_JOBS: usize = 1;
