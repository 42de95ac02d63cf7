use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The filter used when `RUST_LOG` is not set.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("trivia={}", level)
}

/// Initialize the logging system. Diagnostics go to standard error so they never mix
/// with the quiz itself.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
