//! XML configuration support.
//!
//! Optional file with ambient settings; the two roots and dry-run always come
//! from the command line.
//!
//! <config>
//!   <log_level>normal</log_level>
//!   <log_file>/tmp/date_sorter.log</log_file>
//!   <extension>jpg</extension>
//!   <ignore_case>false</ignore_case>
//!   <jobs>1</jobs>
//! </config>

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, FilePattern, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    extension: Option<String>,
    ignore_case: Option<bool>,
    #[serde(default, deserialize_with = "de_usize_trimmed_opt")]
    jobs: Option<usize>,
}

// Custom deserializer that trims surrounding whitespace for optional usize
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<usize>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Settings read from a config file. Every field is optional; unset fields
/// leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSettings {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub extension: Option<String>,
    pub ignore_case: Option<bool>,
    pub jobs: Option<usize>,
}

impl FileSettings {
    /// Copy the set fields into `cfg`.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(level) = &self.log_level {
            cfg.log_level = level.clone();
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = Some(path.clone());
        }
        if self.extension.is_some() || self.ignore_case.is_some() {
            let ext = self
                .extension
                .clone()
                .unwrap_or_else(|| cfg.pattern.extension().to_string());
            let case_sensitive = self
                .ignore_case
                .map(|ignore| !ignore)
                .unwrap_or_else(|| cfg.pattern.case_sensitive());
            cfg.pattern = FilePattern::new(&ext, case_sensitive);
        }
        if let Some(jobs) = self.jobs {
            cfg.jobs = jobs.max(1);
        }
    }
}

fn xml_to_settings(parsed: XmlConfig, path: &Path) -> Result<FileSettings> {
    let log_level = match parsed.log_level.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(
            s.parse::<LogLevel>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("config '{}'", path.display()))?,
        ),
    };
    let log_file = parsed
        .log_file
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);
    let extension = parsed
        .extension
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(FileSettings {
        log_level,
        log_file,
        extension,
        ignore_case: parsed.ignore_case,
        jobs: parsed.jobs,
    })
}

/// Load settings from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<FileSettings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_settings(parsed, path)
}

/// Load settings from `$DATE_SORTER_CONFIG` or the default location.
///
/// - env var set but file missing: error
/// - default location missing: Ok(None)
pub fn load_config_from_xml() -> Result<Option<FileSettings>> {
    let Some((path, from_env)) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        if from_env {
            bail!("config file from {} not found: {}", super::CONFIG_ENV, path.display());
        }
        debug!("No config file at {}", path.display());
        return Ok(None);
    }
    load_config_from_xml_path(&path).map(Some)
}
