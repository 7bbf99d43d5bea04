//! Bridge configuration, injected at startup.

use std::time::Duration;

/// Default address of the DevTools HTTP server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:18080";

/// Default per-request timeout for backend calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Where to reach the DevTools server and how long to wait for it.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl BridgeConfig {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self { base_url: base_url.into(), timeout: Duration::from_secs(timeout_secs) }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS)
    }
}
