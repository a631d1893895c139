//! Weather upstream configuration.

use std::env;

/// Configuration for the weather API behind the weather endpoint
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Secret API key. Requests fail with a generic 500 when this is absent;
    /// the key itself is never exposed to callers.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Unit system sent with every upstream call
    pub units: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.shecodes.io/weather/v1".to_string(),
            units: "metric".to_string(),
        }
    }
}

impl WeatherConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let api_key = env::var("WEATHER_API_KEY").ok();

        let base_url = env::var("WEATHER_BASE_URL")
            .unwrap_or_else(|_| "https://api.shecodes.io/weather/v1".to_string());

        let units = env::var("WEATHER_UNITS").unwrap_or_else(|_| "metric".to_string());

        Self {
            api_key,
            base_url,
            units,
        }
    }
}
