//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub domain: String,
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Session and flash-cookie signing key, at least 64 bytes.
    pub secret: String,
    /// Base URL of the marketing backend, e.g. `http://localhost:5000`.
    pub api_base_url: String,
    /// Serve fixture data instead of calling the backend.
    #[serde(default)]
    pub mock_mode: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}
