use rawcopy_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; a broken log dir must not stop the copy.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    let result = Cli::run_from_args();
    if let Err(err) = &result {
        tracing::error!("{:#}", err);
        eprintln!("{}", cli::error_line(err));
    }
    std::process::exit(cli::exit_code(&result));
}
