use tikfetch_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the XDG state dir; fall back to stderr if that fails.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("tikfetch error: {:#}", err);
        std::process::exit(1);
    }
}
