use serde::{Deserialize, Serialize};

/// Default upstream judge platform
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://leetcode.com";

/// Proxy service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Whether to allow LAN access
    /// - false: local only 127.0.0.1 (default)
    /// - true: listen on 0.0.0.0
    #[serde(default)]
    pub allow_lan_access: bool,

    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upstream request timeout (seconds), 0 disables the timeout
    #[serde(default)]
    pub request_timeout: u64,

    /// Base URL of the judge platform (REST and GraphQL live under it)
    #[serde(default = "default_upstream_base_url")]
    pub upstream_base_url: String,

    /// Outbound proxy configuration
    #[serde(default)]
    pub upstream_proxy: UpstreamProxyConfig,
}

/// Outbound proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpstreamProxyConfig {
    /// Whether enabled
    #[serde(default)]
    pub enabled: bool,
    /// Proxy address (http://, https://, socks5://)
    #[serde(default)]
    pub url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            allow_lan_access: false,
            port: default_port(),
            request_timeout: 0,
            upstream_base_url: default_upstream_base_url(),
            upstream_proxy: UpstreamProxyConfig::default(),
        }
    }
}

fn default_port() -> u16 {
    8046
}

fn default_upstream_base_url() -> String {
    DEFAULT_UPSTREAM_BASE_URL.to_string()
}

impl ProxyConfig {
    /// Get the actual listening address
    pub fn get_bind_address(&self) -> &str {
        if self.allow_lan_access {
            "0.0.0.0"
        } else {
            "127.0.0.1"
        }
    }
}
