use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber on stderr; stdout is reserved for chart output.
pub fn init(verbose: u8, quiet: bool) {
    let filter = match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
