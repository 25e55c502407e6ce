use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the ledger server lives and how long we wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the server (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds (default: 150).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Presentation knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Symbol printed in front of amounts (default: "$").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    150
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_tick_ms() -> u64 {
    250
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
