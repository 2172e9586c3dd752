use tracing_subscriber::EnvFilter;

/// Initialize logging for the CLI.
///
/// `verbose` comes from the out-of-band read of the diagnostics field, so
/// the config load itself can already log at debug level when asked to.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
