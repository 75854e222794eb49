// ============================================================
// Layer 6 — Logging Setup
// ============================================================
// Installs the tracing-subscriber fmt layer. RUST_LOG, when set
// to a valid filter, replaces the built-in default entirely;
// otherwise the crate logs at info.

use tracing_subscriber::EnvFilter;

use crate::domain::traits::EnvSource;

/// Filter used when RUST_LOG is unset, empty, or unparsable
pub const DEFAULT_FILTER: &str = "train_stub=info";

/// Build the log filter from an optional RUST_LOG value.
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|e| {
            eprintln!("Ignoring invalid RUST_LOG '{directives}': {e}");
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::new(DEFAULT_FILTER),
    }
}

/// Install the global subscriber, reading RUST_LOG from `env`.
pub fn init(env: &dyn EnvSource) {
    let rust_log = env.var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(rust_log.as_deref()))
        .init();
}
