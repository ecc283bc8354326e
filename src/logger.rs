//! Logging backend for the `log` facade.
//!
//! All diagnostics go to stderr so that stdout only carries the run summary.

use chrono::Local;
use fern::Dispatch;
use log::{LevelFilter, debug};

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the stderr logger. `verbose` lowers the threshold from `warn` to `debug`.
///
/// Calling this more than once keeps the first logger.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let logger = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S %:z"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Err(e) = logger.apply() {
        eprintln!("Failed to apply logger: {:?}", e);
        return;
    }

    debug!("{} v{}", CRATE_NAME, CRATE_VERSION);
}
