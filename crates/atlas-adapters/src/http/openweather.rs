//! OpenWeatherMap current-weather client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::instrument;

use atlas_core::{
    application::ports::{SourceError, SourceResult, WeatherSource},
    domain::{Coordinates, WeatherReading},
};

use super::{configured_key, endpoint, get_json};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Current conditions by coordinates, metric units; requires an API key.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: configured_key(api_key),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainDto,
    wind: WindDto,
    #[serde(default)]
    weather: Vec<ConditionDto>,
    #[serde(default)]
    dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct MainDto {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WindDto {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionDto {
    main: String,
}

impl From<CurrentWeather> for WeatherReading {
    fn from(w: CurrentWeather) -> Self {
        Self {
            temperature_c: w.main.temp,
            condition: w.weather.into_iter().next().map(|c| c.main),
            humidity_pct: w.main.humidity.clamp(0.0, 100.0).round() as u8,
            wind_speed_ms: w.wind.speed,
            observed_at: w.dt.and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    #[instrument(skip(self), fields(lat = at.latitude, lon = at.longitude))]
    async fn current(&self, at: Coordinates) -> SourceResult<WeatherReading> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(SourceError::NotConfigured("weather"))?;

        let url = endpoint(&self.base_url, &["weather"])?;
        let lat = at.latitude.to_string();
        let lon = at.longitude.to_string();
        let request = self.client.get(url).query(&[
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("units", "metric"),
            ("appid", key),
        ]);

        let weather: CurrentWeather = get_json(request, "weather").await?;
        Ok(weather.into())
    }
}
