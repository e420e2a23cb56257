//! Logging init: tracing fmt subscriber on stderr.
//!
//! Lookups degrade silently for callers; the warnings emitted here are the only
//! trace of a failed upstream call.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,rental_listings=info";
const VERBOSE_FILTER: &str = "info,rental_listings=debug";

/// Install the global subscriber. `RUST_LOG` wins over the built-in filter.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
