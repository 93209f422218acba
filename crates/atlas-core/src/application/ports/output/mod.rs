//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `atlas-adapters` crate provides implementations. Any provider that
//! returns data of these shapes is substitutable; the services never learn
//! which API is on the other side.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Coordinates, CountryCode, CountryDetail, CountrySummary, WeatherReading};

/// Failure reported by a data source.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SourceError {
    /// The requested resource does not exist.
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    /// The request never completed (DNS, TLS, connection reset, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// The request did not finish in time.
    #[error("request timed out")]
    Timeout,

    /// The response could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The source lacks credentials or an endpoint and was not called.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

impl SourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type returned by every port.
pub type SourceResult<T> = Result<T, SourceError>;

/// Port for the full country list.
///
/// Implemented by:
/// - `atlas_adapters::http::RestCountriesClient` (production)
/// - `atlas_adapters::memory::InMemoryCountries` (testing)
///
/// Records that cannot be mapped into domain types should be skipped by the
/// adapter rather than failing the whole collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch every country.
    async fn fetch_all(&self) -> SourceResult<Vec<CountrySummary>>;
}

/// Port for the primary (mandatory) record of a single country.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetch one country by code; unknown codes are `SourceError::NotFound`.
    async fn fetch_country(&self, code: &CountryCode) -> SourceResult<CountryDetail>;
}

/// Port for the encyclopedia summary.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Short text extract for a free-text title, `None` when there is no content.
    async fn summary(&self, title: &str) -> SourceResult<Option<String>>;
}

/// Port for the stock-photo search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoSource: Send + Sync {
    /// Ordered image URLs for a query, at most `limit` of them.
    async fn search(&self, query: &str, limit: usize) -> SourceResult<Vec<String>>;
}

/// Port for current weather.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Current conditions at the given coordinates, temperature in Celsius.
    async fn current(&self, at: Coordinates) -> SourceResult<WeatherReading>;
}
