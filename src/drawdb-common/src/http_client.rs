//! HTTP client factory for the share services.
//!
//! Every client built here carries the same User-Agent, pool settings and
//! timeouts, so requests to the document store look identical regardless of
//! which component issued them.

use reqwest::Client;
use std::time::Duration;

/// User-Agent sent with every request. The gist API rejects requests without one.
pub const USER_AGENT: &str = concat!("drawdb-share/", env!("CARGO_PKG_VERSION"));

/// Default timeout for document store requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Idle pooled connections are dropped after this long so DNS gets re-resolved.
pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Creates an HTTP client with a custom timeout.
///
/// # Example
/// ```ignore
/// let client = create_client_with_timeout(DEFAULT_TIMEOUT).expect("HTTP client");
/// let resp = client.get("https://api.github.com/gists/abc123").send().await.ok();
/// ```
///
/// The read timeout is capped at 60s so a truncated body cannot hang a share.
pub fn create_client_with_timeout(timeout: Duration) -> Result<Client, String> {
    let read_timeout = timeout.min(Duration::from_secs(60));

    create_client_builder()
        .timeout(timeout)
        .read_timeout(read_timeout)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {e}"))
}

/// Creates an HTTP client builder with the standard configuration.
///
/// Use this when the client needs further customization before building.
pub fn create_client_builder() -> reqwest::ClientBuilder {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(DEFAULT_TIMEOUT)
        .read_timeout(DEFAULT_TIMEOUT)
        .tcp_nodelay(true)
        .pool_idle_timeout(POOL_IDLE_TIMEOUT)
        .pool_max_idle_per_host(4)
}
