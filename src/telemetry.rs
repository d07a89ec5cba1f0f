use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber; `RUST_LOG` wins over `default_filter`.
/// Records from the core crate's `log` macros are forwarded as well.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
