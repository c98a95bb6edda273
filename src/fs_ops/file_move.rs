//! Single file move.
//! A plain rename: atomic on one filesystem, and an existing destination file is
//! replaced. There is no copy fallback; a cross-device rename is an error.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::errors::SorterError;

use super::helpers::move_error;

/// Move `src` to `dest`, or only log the intent when `dry_run` is set.
pub fn move_file(src: &Path, dest: &Path, dry_run: bool) -> Result<(), SorterError> {
    if dry_run {
        info!(src = %src.display(), dest = %dest.display(), "[DRY RUN] would move file");
        return Ok(());
    }

    info!(src = %src.display(), dest = %dest.display(), "Moving file");
    fs::rename(src, dest).map_err(move_error(src, dest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn move_file_success() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("in").child("2020-04-10 00.07.15.jpg");
        source.write_str("hello").unwrap();
        let dest = temp.child("2020-04-10 00.07.15.jpg");

        move_file(source.path(), dest.path(), false).expect("move_file should succeed");

        assert!(!source.path().exists());
        assert_eq!(std::fs::read_to_string(dest.path()).unwrap(), "hello");
    }

    #[test]
    fn move_file_overwrites_existing_destination() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("a.jpg");
        source.write_str("new").unwrap();
        let dest = temp.child("b.jpg");
        dest.write_str("old").unwrap();

        move_file(source.path(), dest.path(), false).unwrap();

        assert_eq!(std::fs::read_to_string(dest.path()).unwrap(), "new");
    }

    #[test]
    fn dry_run_leaves_source_in_place() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("a.jpg");
        source.write_str("x").unwrap();
        let dest = temp.child("b.jpg");

        move_file(source.path(), dest.path(), true).unwrap();

        assert!(source.path().exists());
        assert!(!dest.path().exists());
    }

    #[test]
    fn missing_destination_directory_is_a_move_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("a.jpg");
        source.write_str("x").unwrap();
        let dest = temp.child("gone").child("a.jpg");

        let err = move_file(source.path(), dest.path(), false).unwrap_err();
        assert!(matches!(err, SorterError::Move { .. }), "{err:?}");
        assert!(source.path().exists());
    }
}
