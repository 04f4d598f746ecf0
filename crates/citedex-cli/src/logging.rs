use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CITEDEX_LOG";

/// Installs the global `tracing` subscriber writing to stderr.
///
/// The filter comes from `CITEDEX_LOG` if set. Otherwise `-v` selects
/// `info`, `-vv` and above select `debug`, and without `-v` the configured
/// filter (or `warn`) is used.
pub fn init(verbosity: u8, config_filter: Option<&str>) {
    let default_filter = match verbosity {
        0 => config_filter.unwrap_or("warn"),
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    // a subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
