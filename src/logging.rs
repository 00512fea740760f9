//! Logging setup for hosts that do not install their own subscriber.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed, either by the host or through [`init`].
//!
//! ```rust,ignore
//! portal_search::logging::init();
//! tracing::info!("search ready");
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives, e.g. `portal_search=debug`
pub const LOG_ENV: &str = "PORTAL_SEARCH_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install a stderr fmt subscriber filtered by [`LOG_ENV`].
///
/// Returns false when a global subscriber was already set, in which case
/// that one stays in charge.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_defers_to_existing_subscriber() {
        init();
        assert!(!init());
        tracing::debug!("still logging after repeated init");
    }
}
