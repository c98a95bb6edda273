//! Candidate discovery.
//! Walks the input root without following symlinks, skips hidden entries below
//! the root, and keeps regular files matching the pattern. Order is whatever the
//! filesystem yields.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::FilePattern;
use crate::errors::SorterError;

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Every matching regular file under `root`. The first walk error aborts.
pub fn discover(root: &Path, pattern: &FilePattern) -> Result<Vec<PathBuf>, SorterError> {
    let mut found = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|source| {
            let path = source.path().unwrap_or(root).to_path_buf();
            SorterError::Discovery { path, source }
        })?;
        if entry.file_type().is_file() && pattern.matches(entry.path()) {
            found.push(entry.into_path());
        }
    }

    debug!(root = %root.display(), count = found.len(), %pattern, "Discovery finished");
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn names(mut paths: Vec<PathBuf>) -> Vec<String> {
        paths.sort();
        paths
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn finds_nested_matches_only() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("2020-04-10/2020-04-10 00.07.15.jpg").touch().unwrap();
        temp.child("a/b/c/2021-01-01 x.jpg").touch().unwrap();
        temp.child("2020-04-10/notes.txt").touch().unwrap();
        temp.child("upper/2020-04-11 y.JPG").touch().unwrap();
        temp.child("dir.jpg").create_dir_all().unwrap();

        let found = discover(temp.path(), &FilePattern::default()).unwrap();
        assert!(found.iter().all(|p| p.is_absolute()));
        assert_eq!(
            names(found),
            vec!["2020-04-10 00.07.15.jpg", "2021-01-01 x.jpg"]
        );
    }

    #[test]
    fn ignore_case_pattern_picks_up_upper_case() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.jpg").touch().unwrap();
        temp.child("b.JPG").touch().unwrap();

        let found = discover(temp.path(), &FilePattern::new("jpg", false)).unwrap();
        assert_eq!(names(found), vec!["a.jpg", "b.JPG"]);
    }

    #[test]
    fn hidden_entries_are_skipped() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child(".thumbs/2020-04-10 a.jpg").touch().unwrap();
        temp.child(".2020-04-10 b.jpg").touch().unwrap();
        temp.child("2020-04-10 c.jpg").touch().unwrap();

        let found = discover(temp.path(), &FilePattern::default()).unwrap();
        assert_eq!(names(found), vec!["2020-04-10 c.jpg"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_discovered() {
        let temp = assert_fs::TempDir::new().unwrap();
        let real = temp.child("real.jpg");
        real.touch().unwrap();
        std::os::unix::fs::symlink(real.path(), temp.path().join("link.jpg")).unwrap();

        let found = discover(temp.path(), &FilePattern::default()).unwrap();
        assert_eq!(names(found), vec!["real.jpg"]);
    }

    #[test]
    fn missing_root_is_a_discovery_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let err = discover(&temp.path().join("missing"), &FilePattern::default()).unwrap_err();
        assert!(matches!(err, SorterError::Discovery { .. }), "{err:?}");
    }
}
