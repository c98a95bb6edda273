//! Stop coordination and the crash-path exit watchdog.
//!
//! Notes:
//! - The stop flag is owned by a `Sorter` and handed out as cloneable
//!   `StopHandle`s; nothing here is process-global.
//! - Relaxed atomics are sufficient for a one-way "stop" flag.
//! - `StopHandle::request()` is safe to call from the ctrlc handler thread.

use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Grace period between the first fatal error and a forced exit.
pub const EXIT_GRACE: Duration = Duration::from_secs(1);

/// Cloneable handle to a cooperative stop flag.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a cooperative stop (idempotent).
    #[inline]
    pub fn request(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Check whether a stop has been requested.
    #[inline]
    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Clear the flag so the owner can run again.
    #[inline]
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

/// Force the process to exit with `code` after `grace`, whatever the main
/// thread is doing by then.
pub fn exit_after(grace: Duration, code: i32) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(grace);
        process::exit(code);
    })
}
