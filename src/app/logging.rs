//! Logging configuration and initialization.

use tracing::debug;

/// Initialize tracing for the process; `-v` raises the default filter.
pub fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(verbose >= 2)
        .init();

    debug!("tandem started with verbosity level: {}", verbose);
}
