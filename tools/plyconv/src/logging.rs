use tracing_subscriber::EnvFilter;

/// Log to stderr, preferring `RUST_LOG` over `level`.
pub fn init(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
