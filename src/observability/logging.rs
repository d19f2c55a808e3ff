//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the embedding application
//! - Respect RUST_LOG, falling back to the given default filter
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Idempotent: a second call (common in tests) is a no-op

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
pub fn init_logging(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // try_init so embedding apps and parallel tests can both call this.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
