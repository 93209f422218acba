//! `CountrySummary`: one row of the directory.
//!
//! Summaries are fetched once as a full collection and never mutated
//! afterwards; the directory owns them for the lifetime of a listing.

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{Coordinates, CountryCode, Region},
};

/// Flag image references. At least one of `svg`/`png` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagImages {
    svg: Option<String>,
    png: Option<String>,
    alt: Option<String>,
}

impl FlagImages {
    /// Build flag references, rejecting records without any image.
    pub fn new(
        svg: Option<String>,
        png: Option<String>,
        alt: Option<String>,
    ) -> Result<Self, DomainError> {
        let svg = svg.filter(|s| !s.trim().is_empty());
        let png = png.filter(|s| !s.trim().is_empty());
        if svg.is_none() && png.is_none() {
            return Err(DomainError::MissingRequiredField { field: "flags" });
        }
        Ok(Self {
            svg,
            png,
            alt: alt.filter(|s| !s.trim().is_empty()),
        })
    }

    /// Preferred image: SVG when available, PNG otherwise.
    pub fn preferred(&self) -> &str {
        self.svg
            .as_deref()
            .or(self.png.as_deref())
            .unwrap_or_default()
    }

    pub fn svg(&self) -> Option<&str> {
        self.svg.as_deref()
    }

    pub fn png(&self) -> Option<&str> {
        self.png.as_deref()
    }

    /// Alt text, falling back to `Flag of <name>`.
    pub fn alt_text(&self, common_name: &str) -> String {
        self.alt
            .clone()
            .unwrap_or_else(|| format!("Flag of {common_name}"))
    }
}

/// A country as listed in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub code: CountryCode,
    pub name: String,
    pub official_name: String,
    pub capital: Option<String>,
    pub region: Region,
    pub subregion: Option<String>,
    pub population: u64,
    pub flag: FlagImages,
    pub capital_coordinates: Option<Coordinates>,
}

impl CountrySummary {
    /// Capital for display, `N/A` when the country has none.
    pub fn capital_or_na(&self) -> &str {
        self.capital.as_deref().unwrap_or("N/A")
    }

    /// Whether the official name adds anything over the common one.
    pub fn has_distinct_official_name(&self) -> bool {
        self.official_name != self.name
    }

    /// Coordinates usable for a weather lookup, if any.
    pub fn weather_coordinates(&self) -> Option<Coordinates> {
        self.capital_coordinates
            .filter(Coordinates::is_weather_queryable)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name.common" });
        }
        Ok(())
    }
}
