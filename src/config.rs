use std::time::Duration;

use crate::constants::{NWS_API_BASE, REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Settings for the weather service
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// NWS API base URL, without a trailing slash
    pub base_url: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

impl WeatherConfig {
    /// Config targeting a different API host, e.g. a local mock server
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_nws() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.weather.gov");
        assert_eq!(config.user_agent, "weather-app/1.0");
        assert_eq!(config.timeout(), Duration::from_secs(40));
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let config = WeatherConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.user_agent, USER_AGENT);
        assert_eq!(config.timeout_secs, REQUEST_TIMEOUT_SECS);
    }
}
