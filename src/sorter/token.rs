//! Date token and destination derivation.
//!
//! `2020-04-10 00.07.15.jpg` -> token `2020-04-10`
//! -> `<output_root>/2020-04-10/2020-04-10 00.07.15.jpg`.
//! The token is an opaque grouping key; it is never parsed as a date.

use std::path::{Path, PathBuf};

use crate::errors::SorterError;

/// Substring of `basename` before the first space.
///
/// A name without a space, or one starting with a space, yields the whole
/// basename, so every file lands in a directory of its own name rather than
/// directly in the output root.
pub fn date_token(basename: &str) -> &str {
    match basename.split_once(' ') {
        Some((token, _)) if !token.is_empty() => token,
        _ => basename,
    }
}

/// Where a source file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub token: String,
    pub dir: PathBuf,
    pub file: PathBuf,
}

/// Compute `output_root/<token>/<basename>` for `source`.
pub fn destination_for(output_root: &Path, source: &Path) -> Result<Destination, SorterError> {
    let basename = source
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SorterError::InvalidFileName(source.to_path_buf()))?;
    let token = date_token(basename);
    let dir = output_root.join(token);
    let file = dir.join(basename);
    Ok(Destination {
        token: token.to_string(),
        dir,
        file,
    })
}
