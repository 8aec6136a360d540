//! Tracing setup.
//!
//! Logs always go to stderr: stdout carries the MCP protocol stream.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "WORDSVC_LOG";

/// Install the global subscriber. `WORDSVC_LOG` (an `EnvFilter` directive)
/// takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed (e.g. in tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
