//! Best-effort enrichment attached to a country page.
//!
//! Each field is either fully populated or replaced by its fallback:
//! the summary by [`NO_SUMMARY`], photos by an empty gallery, weather by
//! `None`. Nothing is ever left half-filled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::detail::CountryDetail;

/// Summary text used whenever the encyclopedia has nothing to offer.
pub const NO_SUMMARY: &str = "No summary available.";

/// Condition label used when the weather provider omits one.
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Raw weather reading as reported by a provider, before normalisation.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub condition: Option<String>,
    pub humidity_pct: u8,
    pub wind_speed_ms: f64,
    pub observed_at: Option<DateTime<Utc>>,
}

/// Current weather at a capital, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Whole degrees Celsius.
    pub temperature_c: i32,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_speed_ms: f64,
    pub observed_at: Option<DateTime<Utc>>,
}

impl From<WeatherReading> for WeatherSnapshot {
    fn from(reading: WeatherReading) -> Self {
        Self {
            temperature_c: round_half_up(reading.temperature_c),
            condition: reading
                .condition
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_CONDITION.to_string()),
            humidity_pct: reading.humidity_pct.min(100),
            wind_speed_ms: reading.wind_speed_ms,
            observed_at: reading.observed_at,
        }
    }
}

/// Nearest whole number, halves rounded towards positive infinity.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Summary, gallery and weather for one country page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentBundle {
    pub summary: String,
    pub photos: Vec<String>,
    pub weather: Option<WeatherSnapshot>,
}

impl EnrichmentBundle {
    /// The bundle shown when every enrichment failed.
    pub fn fallback() -> Self {
        Self {
            summary: NO_SUMMARY.to_string(),
            photos: Vec::new(),
            weather: None,
        }
    }

    pub fn has_summary(&self) -> bool {
        self.summary != NO_SUMMARY
    }
}

impl Default for EnrichmentBundle {
    fn default() -> Self {
        Self::fallback()
    }
}

/// The merged view model produced by the detail aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryProfile {
    pub detail: CountryDetail,
    pub enrichment: EnrichmentBundle,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temp: f64, condition: Option<&str>) -> WeatherReading {
        WeatherReading {
            temperature_c: temp,
            condition: condition.map(Into::into),
            humidity_pct: 40,
            wind_speed_ms: 3.5,
            observed_at: None,
        }
    }

    #[test]
    fn temperature_rounds_to_nearest_degree() {
        assert_eq!(WeatherSnapshot::from(reading(21.6, None)).temperature_c, 22);
        assert_eq!(WeatherSnapshot::from(reading(21.4, None)).temperature_c, 21);
        assert_eq!(WeatherSnapshot::from(reading(21.5, None)).temperature_c, 22);
        assert_eq!(WeatherSnapshot::from(reading(-2.5, None)).temperature_c, -2);
        assert_eq!(WeatherSnapshot::from(reading(-2.6, None)).temperature_c, -3);
    }

    #[test]
    fn missing_condition_becomes_unknown() {
        assert_eq!(WeatherSnapshot::from(reading(10.0, None)).condition, "Unknown");
        assert_eq!(WeatherSnapshot::from(reading(10.0, Some(""))).condition, "Unknown");
        assert_eq!(
            WeatherSnapshot::from(reading(10.0, Some("Clouds"))).condition,
            "Clouds"
        );
    }

    #[test]
    fn fallback_bundle_has_placeholders() {
        let bundle = EnrichmentBundle::fallback();
        assert_eq!(bundle.summary, NO_SUMMARY);
        assert!(bundle.photos.is_empty());
        assert!(bundle.weather.is_none());
        assert!(!bundle.has_summary());
    }
}
