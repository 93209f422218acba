//! Atlas Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Atlas, a
//! country explorer: a searchable, paginated directory of every country and
//! a per-country page that merges one primary record with a best-effort
//! summary, photo gallery and current weather.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            atlas-cli (CLI)              │
//! │     (list, show, browse commands)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (DirectoryService, DetailService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Directory, Country, Summary, Photo,   │
//! │          Weather sources)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     atlas-adapters (Infrastructure)     │
//! │ (REST clients, in-memory, placeholder)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Directory, CountryDetail, Weather)    │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use atlas_core::{
//!     application::{DetailService, DirectoryService},
//!     domain::{CountryCode, DirectoryQuery, Region},
//! };
//!
//! # async fn run(directory_service: DirectoryService, details: DetailService) -> atlas_core::error::AtlasResult<()> {
//! // 1. Load and query the directory
//! let directory = directory_service.load().await?;
//! let page = directory.query(&DirectoryQuery::new("land", Some(Region::Europe)));
//!
//! // 2. Open one country page
//! let profile = details.load_detail(&CountryCode::parse("FIN")?).await?;
//! # Ok(())
//! # }
//! ```

// Pure domain logic
pub mod domain;

// Orchestration and ports
pub mod application;

// Unified error type
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DetailService, DetailSources, DirectoryService, EnrichmentOptions, LoadState,
        LoadTracker,
        ports::{CountrySource, DirectorySource, PhotoSource, SummarySource, WeatherSource},
        ports::{SourceError, SourceResult},
    };
    pub use crate::domain::{
        Coordinates, CountryCode, CountryDetail, CountryProfile, CountrySummary, Directory,
        DirectoryPage, DirectoryQuery, EnrichmentBundle, Region, WeatherReading, WeatherSnapshot,
    };
    pub use crate::error::{AtlasError, AtlasResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
