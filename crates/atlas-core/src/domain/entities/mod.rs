pub mod country;
pub mod detail;
pub mod enrichment;

pub use crate::domain::DomainError;
pub use country::{CountrySummary, FlagImages};
pub use detail::{CountryDetail, Currency};
pub use enrichment::{CountryProfile, EnrichmentBundle, WeatherReading, WeatherSnapshot};
