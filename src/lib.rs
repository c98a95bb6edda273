//! Core library for `date_sorter`.
//!
//! Moves files named `<token> <rest>.<ext>` from an input tree into
//! `<output_root>/<token>/`. The binary adds argument parsing, logging setup
//! and the crash handler around [`Sorter`].

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod shutdown;
pub mod sorter;

pub use config::{
    CONFIG_ENV, Config, FilePattern, LogLevel, default_config_path, path_has_symlink_ancestor,
    validate_and_normalize,
};
pub use errors::SorterError;
pub use shutdown::StopHandle;
pub use sorter::{Destination, RunSummary, Sorter, SorterState, date_token, destination_for};
