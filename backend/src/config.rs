//! Service configuration, read from the environment once at startup.

use std::time::Duration;

/// Runtime configuration for the backend service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// NewsAPI.org key; absence degrades news to mock articles.
    pub news_api_key: Option<String>,
    /// Timeout applied to news provider requests.
    pub news_timeout: Duration,
    /// Timeout applied to price provider requests.
    pub price_timeout: Duration,
    /// How often to refresh signals for the tracked equities.
    pub refresh_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            news_api_key: None,
            news_timeout: Duration::from_secs(10),
            price_timeout: Duration::from_secs(10),
            refresh_interval: Duration::from_secs(300),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables. Unset or
    /// unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            news_api_key: std::env::var("NEWS_API_KEY").ok().filter(|k| !k.is_empty()),
            news_timeout: env_secs("NEWS_TIMEOUT_SECS").unwrap_or(defaults.news_timeout),
            price_timeout: env_secs("PRICE_TIMEOUT_SECS").unwrap_or(defaults.price_timeout),
            refresh_interval: env_secs("REFRESH_INTERVAL_SECS").unwrap_or(defaults.refresh_interval),
        }
    }
}

fn env_secs(name: &str) -> Option<Duration> {
    std::env::var(name).ok()?.parse().ok().map(Duration::from_secs)
}
