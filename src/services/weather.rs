//! Weather service fetching current conditions and forecast for a city.

use crate::config::WeatherConfig;
use crate::models::WeatherBundle;
use crate::services::upstream::{UpstreamError, gather, get_json};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Service for the weather upstream behind the weather endpoint
pub struct WeatherService {
    client: Client,
    config: WeatherConfig,
}

impl WeatherService {
    /// Create a new weather service with the given configuration
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Fetch current conditions and the daily forecast for a city.
    ///
    /// Both upstream calls are issued together and awaited jointly; if either
    /// fails, the whole lookup fails. Fails without touching the network when
    /// no API key is configured.
    pub async fn get_weather(&self, city: &str) -> Result<WeatherBundle, UpstreamError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingApiKey)?;

        let current_url = self.endpoint_url("current", city, api_key)?;
        let forecast_url = self.endpoint_url("forecast", city, api_key)?;

        debug!(%city, "Fetching current conditions and forecast");

        let (current, forecast) = gather(
            get_json(&self.client, current_url),
            get_json(&self.client, forecast_url),
        )
        .await?;

        // The forecast shape is not under our control; check before narrowing.
        let daily = forecast
            .get("daily")
            .cloned()
            .ok_or(UpstreamError::InvalidBody("forecast has no daily field"))?;

        Ok(WeatherBundle { current, daily })
    }

    fn endpoint_url(&self, path: &str, city: &str, api_key: &str) -> Result<Url, UpstreamError> {
        let url = Url::parse_with_params(
            &format!("{}/{}", self.config.base_url, path),
            &[
                ("query", city),
                ("key", api_key),
                ("units", self.config.units.as_str()),
            ],
        )?;
        Ok(url)
    }
}
