pub mod adapter;
pub mod types;

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use self::adapter::{ClientAdapter, FetchAdapter};
use self::types::{WeatherError, WeatherInfo};

/// Retrieves the current weather for a city: builds the provider query URL
/// from the process configuration, fetches through the adapter, and
/// normalizes the payload into a [`WeatherInfo`].
pub struct WeatherService {
    config: Config,
    adapter: Arc<dyn FetchAdapter>,
}

impl WeatherService {
    pub fn new(config: Config) -> Self {
        Self::with_adapter(config, Arc::new(ClientAdapter::new()))
    }

    pub fn with_adapter(config: Config, adapter: Arc<dyn FetchAdapter>) -> Self {
        Self { config, adapter }
    }

    fn request_url(&self, city: &str) -> String {
        format!(
            "{}{}?q={}&appid={}&units=metric",
            self.config.openweather_base_url,
            self.config.openweather_weather_path,
            urlencoding::encode(city),
            self.config.openweather_api_key,
        )
    }

    /// Errors from the adapter (network, status, JSON) and from payload
    /// conversion propagate unchanged; there is no local recovery.
    pub async fn retrieve(&self, city: &str) -> Result<WeatherInfo, WeatherError> {
        let url = self.request_url(city);
        tracing::debug!("Fetching weather for '{}' from {}", city, url);

        let payload: Value = self.adapter.fetch(&url).await?;
        WeatherInfo::from_raw(&payload)
    }
}
