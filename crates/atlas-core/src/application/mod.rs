//! Application layer for Atlas.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DirectoryService, DetailService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! domain rules itself. Filtering, ordering and fallbacks live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DEFAULT_PHOTO_COUNT, DetailService, DetailSources, DirectoryService, EnrichmentOptions,
    LoadState, LoadTicket, LoadTracker,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    CountrySource, DirectorySource, PhotoSource, SourceError, SourceResult, SummarySource,
    WeatherSource,
};

pub use error::ApplicationError;
