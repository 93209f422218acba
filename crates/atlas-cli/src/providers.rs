//! Wiring of adapters into the core services.
//!
//! This is the only place that decides which adapter backs which port.

use std::sync::Arc;

use tracing::debug;

use atlas_adapters::{
    OpenWeatherClient, PlaceholderPhotos, PlaceholderWeather, RestCountriesClient,
    UnsplashPhotoClient, WikipediaSummaryClient, build_client,
};
use atlas_core::application::{
    DetailService, DetailSources, DirectoryService, PhotoSource, WeatherSource,
};

use crate::{
    config::{AppConfig, EnrichmentMode},
    error::{CliError, CliResult},
};

/// Adapters built from one configuration, sharing one HTTP client.
pub struct Providers {
    countries: Arc<RestCountriesClient>,
    sources: DetailSources,
    config: AppConfig,
}

impl Providers {
    pub fn from_config(config: &AppConfig) -> CliResult<Self> {
        let client = build_client(&config.http_settings()).map_err(|e| CliError::ConfigError {
            message: format!("Failed to build the HTTP client: {e}"),
            source: Some(Box::new(e)),
        })?;
        let p = &config.providers;

        let countries = Arc::new(RestCountriesClient::new(
            client.clone(),
            p.rest_countries_url.as_str(),
        ));
        let summary = Arc::new(WikipediaSummaryClient::new(
            client.clone(),
            p.wikipedia_url.as_str(),
        ));

        let (photos, weather): (Arc<dyn PhotoSource>, Arc<dyn WeatherSource>) =
            match config.enrichment.mode {
                EnrichmentMode::Live => (
                    Arc::new(UnsplashPhotoClient::new(
                        client.clone(),
                        p.unsplash_url.as_str(),
                        p.unsplash_access_key.clone(),
                    )),
                    Arc::new(OpenWeatherClient::new(
                        client,
                        p.openweather_url.as_str(),
                        p.openweather_api_key.clone(),
                    )),
                ),
                EnrichmentMode::Placeholder => {
                    (Arc::new(PlaceholderPhotos::default()), Arc::new(PlaceholderWeather))
                }
            };

        debug!(mode = ?config.enrichment.mode, "Providers ready");

        Ok(Self {
            sources: DetailSources {
                country: countries.clone(),
                summary,
                photos,
                weather,
            },
            countries,
            config: config.clone(),
        })
    }

    pub fn directory_service(&self) -> DirectoryService {
        DirectoryService::new(self.countries.clone())
    }

    pub fn detail_service(&self) -> DetailService {
        DetailService::new(self.sources.clone(), self.config.enrichment_options())
    }
}
