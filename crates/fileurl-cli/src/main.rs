use fileurl_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; a read-only state dir is not fatal.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    match CliCommand::run_from_args() {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("fileurl error: {:#}", err);
            std::process::exit(1);
        }
    }
}
