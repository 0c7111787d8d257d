//! Logging Setup
//!
//! Sync failures are reported only through `tracing`; this installs a
//! subscriber so they end up somewhere.

/// Install a fmt subscriber. `RUST_LOG` takes precedence over `default_filter`.
///
/// Safe to call more than once; later calls keep the first subscriber.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// In the browser the host page installs its own subscriber.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(_default_filter: &str) {}
