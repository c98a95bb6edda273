//! Application orchestrator.
//! Loads/merges config, initializes logging, validates the roots, installs the
//! signal and panic handlers, runs the sorter, and owns the crash path.

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use date_sorter::cli::Args;
use date_sorter::config::{load_config_from_xml, validate_and_normalize};
use date_sorter::output as out;
use date_sorter::shutdown::{self, EXIT_GRACE};
use date_sorter::{Config, Sorter};

use crate::logging::init_tracing;

/// Exit status when the watchdog has to cut the crash path short.
const CRASH_EXIT_CODE: i32 = 1;
/// Exit status on a second Ctrl-C.
const INTERRUPT_EXIT_CODE: i32 = 130;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Config file first, CLI wins.
    let mut cfg = Config::default();
    if let Some(settings) = load_config_from_xml()? {
        settings.apply(&mut cfg);
    }
    args.apply_overrides(&mut cfg);

    // Held until the end of run so file logs are flushed on every exit path.
    let guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;
    install_panic_hook();

    info!("date_sorter v{} started", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = validate_and_normalize(&mut cfg) {
        error!(code = e.code(), kind = e.kind(), error = %e, "Invalid configuration");
        return Err(e.into());
    }

    let mut sorter = Sorter::new(cfg);
    {
        let stop = sorter.stop_handle();
        ctrlc::set_handler(move || {
            if stop.is_requested() {
                std::process::exit(INTERRUPT_EXIT_CODE);
            }
            stop.request();
            out::print_warn("Received interrupt; stopping before the next file (press again to force)...");
        })
        .context("failed to install signal handler")?;
    }

    match sorter.run() {
        Ok(_) => {
            drop(guard);
            Ok(())
        }
        Err(e) => {
            // Whatever happens below, the process is gone after the grace period.
            shutdown::exit_after(EXIT_GRACE, CRASH_EXIT_CODE);
            error!(code = e.code(), kind = e.kind(), error = %e, "Sort aborted");
            sorter.stop();
            drop(guard);
            Err(e.into())
        }
    }
}

/// Log panics through tracing before the default hook prints them.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        error!(panic = %info, "Unhandled panic");
        default_hook(info);
    }));
}
