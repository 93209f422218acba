//! Placeholder photo and weather sources.
//!
//! These need no API key and never touch the network. Output is derived
//! from the request alone, so the same country always gets the same gallery
//! and the same weather. Selected with `enrichment.mode = "placeholder"`.

use async_trait::async_trait;

use atlas_core::{
    application::ports::{PhotoSource, SourceResult, WeatherSource},
    domain::{Coordinates, WeatherReading},
};

const CONDITIONS: [&str; 5] = ["Clear", "Clouds", "Rain", "Mist", "Snow"];

/// Seeded placeholder images.
#[derive(Debug, Clone)]
pub struct PlaceholderPhotos {
    base_url: String,
}

impl PlaceholderPhotos {
    pub const DEFAULT_BASE_URL: &'static str = "https://picsum.photos/seed";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for PlaceholderPhotos {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl PhotoSource for PlaceholderPhotos {
    async fn search(&self, query: &str, limit: usize) -> SourceResult<Vec<String>> {
        let seed = slug(query);
        let base = self.base_url.trim_end_matches('/');
        Ok((1..=limit)
            .map(|i| format!("{base}/{seed}-{i}/800/600"))
            .collect())
    }
}

/// Plausible weather computed from latitude and longitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderWeather;

#[async_trait]
impl WeatherSource for PlaceholderWeather {
    async fn current(&self, at: Coordinates) -> SourceResult<WeatherReading> {
        let lat = at.latitude.abs();
        let seed = (lat * 100.0 + at.longitude.abs() * 10.0) as u64;

        Ok(WeatherReading {
            // Warm at the equator, cold at the poles.
            temperature_c: 30.0 - lat * 0.6,
            condition: Some(CONDITIONS[(seed % CONDITIONS.len() as u64) as usize].to_string()),
            humidity_pct: 40 + (seed % 50) as u8,
            wind_speed_ms: 1.0 + (seed % 90) as f64 / 10.0,
            observed_at: None,
        })
    }
}

/// Lowercase ASCII alphanumerics joined by `-`.
fn slug(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
