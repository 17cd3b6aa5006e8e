use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout stays a clean status report.
///
/// `RUST_LOG` wins over `verbose`. Safe to call more than once.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
