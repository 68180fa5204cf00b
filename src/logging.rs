use tracing_subscriber::{EnvFilter, fmt};

/// Install the global tracing subscriber.
///
/// Defaults to `info` for everything; `RUST_LOG` overrides it.
pub fn init(service_name: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("info,raidlogs=info,{service_name}=info")));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
