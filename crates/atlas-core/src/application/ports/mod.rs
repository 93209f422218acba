//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `atlas-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `DirectorySource`: the full country list
//!   - `CountrySource`: one country's primary record
//!   - `SummarySource`, `PhotoSource`, `WeatherSource`: best-effort enrichment
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    CountrySource, DirectorySource, PhotoSource, SourceError, SourceResult, SummarySource,
    WeatherSource,
};

#[cfg(test)]
pub use output::{
    MockCountrySource, MockDirectorySource, MockPhotoSource, MockSummarySource,
    MockWeatherSource,
};
