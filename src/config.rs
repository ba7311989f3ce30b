// Backend address resolution. The dashboard talks to a single local API;
// the environment override exists for development against another host.

use tracing::debug;

/// Address of the inventory API when nothing overrides it.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Environment variable consulted by [`Config::from_env`].
pub const API_URL_ENV: &str = "STOCK_LIVE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Read `STOCK_LIVE_API_URL` or fall back to `http://localhost:3000`.
    pub fn from_env() -> Self {
        let config = Self::from_override(std::env::var(API_URL_ENV).ok());
        debug!(api_url = %config.api_url, "resolved backend address");
        config
    }

    fn from_override(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self {
                api_url: url.trim().trim_end_matches('/').to_string(),
            },
            _ => Self::default(),
        }
    }
}
