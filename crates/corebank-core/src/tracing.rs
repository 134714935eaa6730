use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the JSON stdout subscriber, filtered by `RUST_LOG`.
///
/// Idempotent: calling it again after a subscriber is installed is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json())
        .try_init();
}
