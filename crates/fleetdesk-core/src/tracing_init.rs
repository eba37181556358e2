//! Log subscriber setup for the server binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the process-wide subscriber for `fleetdesk-server`.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (usually built by
/// [`default_filter`]) decides what is logged. With `log_json` every event
/// is written as one JSON object per line.
pub fn init_tracing(default_filter: &str, log_json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );
    let registry = tracing_subscriber::registry().with(env_filter);
    if log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Build the default filter directive for a binary from a configured level.
///
/// HTTP request spans from `tower_http` follow the same level so request
/// logging can be turned up or down with one setting.
pub fn default_filter(crate_name: &str, level: &str) -> String {
    format!("{crate_name}={level},fleetdesk_core={level},tower_http={level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_covers_http_layer() {
        assert_eq!(
            default_filter("fleetdesk_server", "debug"),
            "fleetdesk_server=debug,fleetdesk_core=debug,tower_http=debug"
        );
    }
}
