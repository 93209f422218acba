//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "list countries" or "open a country page".

pub mod detail_service;
pub mod directory_service;
pub mod load_tracker;

pub use detail_service::{DEFAULT_PHOTO_COUNT, DetailService, DetailSources, EnrichmentOptions};
pub use directory_service::DirectoryService;
pub use load_tracker::{LoadState, LoadTicket, LoadTracker};
