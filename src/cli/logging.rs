//! Stderr logging bootstrap.

use anyhow::{Result, anyhow};
use flexi_logger::{Logger, LoggerHandle};

/// Maps the `-v` count to a log level spec.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Starts logging to stderr. `RUST_LOG` overrides the verbosity level.
///
/// The returned handle must be kept alive for the duration of the program.
pub fn init(verbose: u8) -> Result<LoggerHandle> {
    let level = level_for(verbose);
    Logger::try_with_env_or_str(level)
        .map_err(|e| anyhow!("invalid log level {}: {}", level, e))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| anyhow!("failed to start logger: {}", e))
}
