//! Filesystem operations used by the sorter.

mod dir;
mod file_move;
mod helpers;

pub use dir::{DirCache, DirStatus};
pub use file_move::move_file;
