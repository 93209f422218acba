// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Atlas.
//!
//! This module contains pure logic with no I/O. Fetching countries,
//! summaries, photos and weather happens behind ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: Loaded records are never mutated in place
//! - **Rich domain model**: Filtering, ordering and fallbacks live here
//!
// Public API - what the world sees
pub mod collation;
pub mod directory;
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use directory::{DEFAULT_PAGE_SIZE, Directory, DirectoryPage, DirectoryQuery};
pub use entities::{
    CountryDetail, CountryProfile, CountrySummary, Currency, EnrichmentBundle, FlagImages,
    WeatherReading, WeatherSnapshot,
    enrichment::{NO_SUMMARY, UNKNOWN_CONDITION},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Coordinates, CountryCode, DriveSide, Region, WeekStart};

pub use validation::DomainValidator;
