use clap::error::ErrorKind;
use std::process::ExitCode;

use date_sorter::cli::{self, USAGE_EXIT_CODE};
use date_sorter::output as out;
use date_sorter::SorterError;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = match cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(USAGE_EXIT_CODE),
            };
        }
    };

    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<SorterError>() {
            // SorterError messages already embed their io/walk cause.
            Some(se) if se.is_configuration() => {
                out::print_error(&se.to_string());
                out::print_usage(&cli::usage());
                ExitCode::from(USAGE_EXIT_CODE)
            }
            Some(se) => {
                out::print_error(&se.to_string());
                ExitCode::FAILURE
            }
            None => {
                out::print_error(&format!("{e:#}"));
                ExitCode::FAILURE
            }
        },
    }
}
