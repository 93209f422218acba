//! Detail Service - aggregates one country page from four sources.
//!
//! The workflow per call:
//! 1. Fetch the primary record (mandatory; failure fails the call)
//! 2. Start summary, photo and weather lookups together
//! 3. Turn each enrichment failure into its fallback
//! 4. Merge once the slowest of the three has settled
//!
//! Nothing is cached: every call starts from scratch, which is also what a
//! retry after a failure does.

use std::{future::Future, sync::Arc, time::Duration};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{
            CountrySource, PhotoSource, SourceError, SourceResult, SummarySource, WeatherSource,
        },
    },
    domain::{
        Coordinates, CountryCode, CountryDetail, CountryProfile, DomainValidator as validator,
        EnrichmentBundle, NO_SUMMARY, WeatherSnapshot,
    },
    error::AtlasResult,
};

/// Photos requested per country page unless configured otherwise.
pub const DEFAULT_PHOTO_COUNT: usize = 12;

/// The four sources a country page is built from.
#[derive(Clone)]
pub struct DetailSources {
    pub country: Arc<dyn CountrySource>,
    pub summary: Arc<dyn SummarySource>,
    pub photos: Arc<dyn PhotoSource>,
    pub weather: Arc<dyn WeatherSource>,
}

/// Tuning knobs for the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentOptions {
    /// Upper bound on gallery size.
    pub photo_count: usize,
    /// Deadline for the primary record; expiry fails the load.
    pub primary_timeout: Option<Duration>,
    /// Deadline for each enrichment; expiry yields its fallback.
    pub enrichment_timeout: Option<Duration>,
}

impl Default for EnrichmentOptions {
    fn default() -> Self {
        Self {
            photo_count: DEFAULT_PHOTO_COUNT,
            primary_timeout: None,
            enrichment_timeout: None,
        }
    }
}

/// Builds [`CountryProfile`]s.
pub struct DetailService {
    sources: DetailSources,
    options: EnrichmentOptions,
}

impl DetailService {
    /// Create a detail service over the given sources.
    pub fn new(sources: DetailSources, options: EnrichmentOptions) -> Self {
        Self { sources, options }
    }

    /// Load a complete country page.
    ///
    /// Only the primary fetch can fail this call. When it does, none of the
    /// enrichment sources are contacted.
    #[instrument(skip(self), fields(code = %code))]
    pub async fn load_detail(&self, code: &CountryCode) -> AtlasResult<CountryProfile> {
        let detail = self.fetch_primary(code).await?;
        info!(name = %detail.name(), "Primary record loaded");

        let enrichment = self.enrich(&detail).await;
        debug!(
            has_summary = enrichment.has_summary(),
            photos = enrichment.photos.len(),
            has_weather = enrichment.weather.is_some(),
            "Enrichment settled"
        );

        Ok(CountryProfile { detail, enrichment })
    }

    /// Run the three enrichment lookups concurrently for a loaded record.
    pub async fn enrich(&self, detail: &CountryDetail) -> EnrichmentBundle {
        let name = detail.name();
        let (summary, photos, weather) = tokio::join!(
            self.summary_or_fallback(name),
            self.photos_or_fallback(name),
            self.weather_or_fallback(detail.summary.weather_coordinates()),
        );

        EnrichmentBundle {
            summary,
            photos,
            weather,
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    async fn fetch_primary(&self, code: &CountryCode) -> Result<CountryDetail, ApplicationError> {
        let fetched = with_deadline(
            self.options.primary_timeout,
            self.sources.country.fetch_country(code),
        )
        .await;

        let detail = fetched.map_err(|e| {
            warn!(error = %e, "Primary country fetch failed");
            ApplicationError::DetailLoad {
                code: code.clone(),
                reason: e.to_string(),
                not_found: e.is_not_found(),
            }
        })?;

        validator::validate_detail(&detail).map_err(|e| ApplicationError::DetailLoad {
            code: code.clone(),
            reason: e.to_string(),
            not_found: false,
        })?;

        Ok(detail)
    }

    async fn summary_or_fallback(&self, name: &str) -> String {
        let result = with_deadline(
            self.options.enrichment_timeout,
            self.sources.summary.summary(name),
        )
        .await;

        match result {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                debug!("No summary content");
                NO_SUMMARY.to_string()
            }
            Err(e) => {
                warn!(error = %e, "Summary lookup failed, using fallback");
                NO_SUMMARY.to_string()
            }
        }
    }

    async fn photos_or_fallback(&self, name: &str) -> Vec<String> {
        let limit = self.options.photo_count;
        let result = with_deadline(
            self.options.enrichment_timeout,
            self.sources.photos.search(name, limit),
        )
        .await;

        match result {
            Ok(mut photos) => {
                photos.truncate(limit);
                photos
            }
            Err(e) => {
                warn!(error = %e, "Photo search failed, using empty gallery");
                Vec::new()
            }
        }
    }

    async fn weather_or_fallback(&self, at: Option<Coordinates>) -> Option<WeatherSnapshot> {
        let Some(at) = at else {
            debug!("No capital coordinates, weather not requested");
            return None;
        };

        let result = with_deadline(
            self.options.enrichment_timeout,
            self.sources.weather.current(at),
        )
        .await;

        match result {
            Ok(reading) => Some(WeatherSnapshot::from(reading)),
            Err(e) => {
                warn!(error = %e, "Weather lookup failed");
                None
            }
        }
    }
}

/// Await `fut`, giving up with `SourceError::Timeout` after `limit`.
async fn with_deadline<T, F>(limit: Option<Duration>, fut: F) -> SourceResult<T>
where
    F: Future<Output = SourceResult<T>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .unwrap_or(Err(SourceError::Timeout)),
        None => fut.await,
    }
}
