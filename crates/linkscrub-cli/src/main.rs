use linkscrub_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Log to the state dir when possible; never let logging kill the CLI.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("linkscrub error: {:#}", err);
        std::process::exit(1);
    }
}
