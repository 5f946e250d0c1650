use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::{fmt, EnvFilter};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Picks the filter directive: an explicit override wins, otherwise `debug` when
/// verbose and `warn` when quiet.
pub fn filter_directive(verbose: bool, override_filter: Option<&str>) -> String {
    match override_filter {
        Some(directive) => directive.to_string(),
        None if verbose => "debug".to_string(),
        None => "warn".to_string(),
    }
}

/// Initialize the tracing subscriber with timestamp, level, and structured fields.
///
/// Logs go to stderr so that reports on stdout can be piped.
pub fn init(verbose: bool, override_filter: Option<&str>) {
    let directive = filter_directive(verbose, override_filter);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::SystemTime)
        .with_level(true)
        .with_target(true)
        .init();
}

/// Set the global verbose mode flag.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::SeqCst);
}

/// Check whether verbose mode is currently enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}
