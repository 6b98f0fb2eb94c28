//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Used when neither `--log` nor `RUST_LOG` is set. Quiet enough that the
/// interactive front ends only show rejected actions.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing for the process. Events go to stderr so they never mix
/// with menu output or CSV reports on stdout.
///
/// `directive` overrides `RUST_LOG`; an unparsable directive falls back to
/// [`DEFAULT_FILTER`]. Safe to call more than once (later calls are no-ops).
pub fn init(directive: Option<&str>) {
    let filter = match directive {
        Some(d) => EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
