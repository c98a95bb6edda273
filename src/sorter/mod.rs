//! The sorting pipeline: Discover -> Compute Destination -> Ensure Directory -> Move.
//!
//! A `Sorter` performs one full pass per `run()`. The first error of any kind
//! aborts the pass; files moved before it stay where they were moved.

mod discover;
mod token;

pub use discover::discover;
pub use token::{Destination, date_token, destination_for};

use rayon::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::SorterError;
use crate::fs_ops::{DirCache, DirStatus, move_file};
use crate::shutdown::StopHandle;

/// Lifecycle of a sorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SorterState {
    Idle,
    Running,
    Completed,
    Crashed,
}

/// What a successful run did (or would have done, in dry-run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub moved: usize,
    pub new_directories: usize,
    pub dry_run: bool,
}

#[derive(Default)]
struct Counters {
    moved: AtomicUsize,
    new_directories: AtomicUsize,
}

/// Moves date-stamped files from `input_root` into `output_root/<token>/`.
///
/// Both roots are assumed to exist; see `config::validate_and_normalize`.
#[derive(Debug)]
pub struct Sorter {
    config: Config,
    state: SorterState,
    stop: StopHandle,
}

impl Sorter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: SorterState::Idle,
            stop: StopHandle::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> SorterState {
        self.state
    }

    /// Handle that can stop a running pass from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Request an orderly stop. The current pass fails with `Interrupted`
    /// before touching the next file.
    pub fn stop(&self) {
        self.stop.request();
    }

    /// Execute one full pass.
    pub fn run(&mut self) -> Result<RunSummary, SorterError> {
        self.state = SorterState::Running;
        let result = self.run_pass();
        self.state = match result {
            Ok(_) => SorterState::Completed,
            Err(_) => SorterState::Crashed,
        };
        result
    }

    fn run_pass(&self) -> Result<RunSummary, SorterError> {
        let cfg = &self.config;
        info!(
            input = %cfg.input_root.display(),
            output = %cfg.output_root.display(),
            pattern = %cfg.pattern,
            dry_run = cfg.dry_run,
            "Sorting started"
        );

        let files = discover(&cfg.input_root, &cfg.pattern)?;
        let dirs = DirCache::new();
        let counters = Counters::default();

        if cfg.jobs <= 1 {
            for src in &files {
                self.sort_one(src, &dirs, &counters)?;
            }
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(cfg.jobs)
                .build()
                .map_err(|e| SorterError::WorkerPool(e.to_string()))?;
            debug!(jobs = cfg.jobs, "Moving with worker pool");
            pool.install(|| {
                files
                    .par_iter()
                    .try_for_each(|src| self.sort_one(src, &dirs, &counters))
            })?;
        }

        let summary = RunSummary {
            discovered: files.len(),
            moved: counters.moved.into_inner(),
            new_directories: counters.new_directories.into_inner(),
            dry_run: cfg.dry_run,
        };
        info!(
            discovered = summary.discovered,
            moved = summary.moved,
            new_directories = summary.new_directories,
            dry_run = summary.dry_run,
            "Sorting completed"
        );
        Ok(summary)
    }

    fn sort_one(&self, src: &Path, dirs: &DirCache, counters: &Counters) -> Result<(), SorterError> {
        if self.stop.is_requested() {
            return Err(SorterError::Interrupted);
        }
        let dry_run = self.config.dry_run;
        let dest = destination_for(&self.config.output_root, src)?;

        match dirs.ensure(&dest.dir, dry_run)? {
            DirStatus::Created | DirStatus::WouldCreate => {
                counters.new_directories.fetch_add(1, Ordering::Relaxed);
            }
            DirStatus::Existing => {}
        }

        move_file(src, &dest.file, dry_run)?;
        counters.moved.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
