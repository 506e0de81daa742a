use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize tracing with the given log level, writing to stderr.
///
/// Stdout is reserved for evaluation results. Log level can be overridden
/// with the `RUST_LOG` environment variable.
pub fn init_tracing(default_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = if json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .boxed()
    };

    tracing_subscriber::registry().with(filter).with(layer).init();
}

/// Initialize tracing for tests (doesn't fail if already initialized).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("valmatch=debug")
        .with_test_writer()
        .try_init();
}
