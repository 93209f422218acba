//! Infrastructure adapters for Atlas.
//!
//! This crate implements the ports defined in `atlas-core::application::ports`.
//! It contains all external dependencies and I/O operations.
//!
//! - [`http`]: REST Countries, Wikipedia, Unsplash and OpenWeatherMap clients
//! - [`memory`]: scripted in-process sources for tests
//! - [`placeholder`]: key-less photo and weather sources

pub mod http;
pub mod memory;
pub mod placeholder;

// Re-export commonly used adapters
pub use http::{
    HttpSettings, OpenWeatherClient, RestCountriesClient, UnsplashPhotoClient,
    WikipediaSummaryClient, build_client,
};
pub use memory::{InMemoryCountries, StaticPhotos, StaticSummary, StaticWeather};
pub use placeholder::{PlaceholderPhotos, PlaceholderWeather};
