use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PHOTOINDEX_LOG";

/// Install the stderr subscriber. `-v` overrides `PHOTOINDEX_LOG`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second install (e.g. from a test harness) is not an error worth surfacing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
