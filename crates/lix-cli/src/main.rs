use lix_core::error::ScanError;
use lix_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible.
    logging::init();

    // Parse CLI and run the scan.
    if let Err(err) = cli::run_from_args() {
        eprintln!("lix error: {:#}", err);
        let code = err
            .downcast_ref::<ScanError>()
            .map_or(1, ScanError::exit_code);
        std::process::exit(code);
    }
}
