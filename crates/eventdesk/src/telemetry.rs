//! Tracing initialisation for applications embedding the store.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to `default_filter`
/// (for example `"eventdesk=debug"`). Returns false if a global subscriber
/// was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing("eventdesk=debug");
        assert!(!init_tracing("eventdesk=trace"));
    }
}
