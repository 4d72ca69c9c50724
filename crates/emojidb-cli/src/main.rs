use emojidb_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; never let it block a search.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    match cli::run_from_args() {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => {
            eprintln!("emojidb error: {:#}", err);
            std::process::exit(1);
        }
    }
}
