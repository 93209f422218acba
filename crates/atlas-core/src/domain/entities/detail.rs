//! `CountryDetail`: the full record shown on a country's page.
//!
//! Constructed fresh on every navigation and discarded afterwards; nothing
//! here is cached or written back into the directory.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::country::CountrySummary,
    value_objects::{DriveSide, WeekStart},
};

/// A currency in use, keyed by its ISO 4217 code in [`CountryDetail::currencies`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

/// Summary facts plus everything the detail-by-identifier source adds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDetail {
    #[serde(flatten)]
    pub summary: CountrySummary,
    /// Land area in square kilometres.
    pub area_km2: f64,
    /// Language code -> display name.
    pub languages: BTreeMap<String, String>,
    /// Currency code -> name and symbol.
    pub currencies: BTreeMap<String, Currency>,
    pub timezones: Vec<String>,
    pub independent: bool,
    pub un_member: bool,
    pub drives_on: DriveSide,
    pub week_starts_on: WeekStart,
}

impl CountryDetail {
    pub fn name(&self) -> &str {
        &self.summary.name
    }

    /// Language names in code order, for display.
    pub fn language_names(&self) -> Vec<&str> {
        self.languages.values().map(String::as_str).collect()
    }

    /// `Euro (€)`-style labels in code order.
    pub fn currency_labels(&self) -> Vec<String> {
        self.currencies
            .values()
            .map(|c| match &c.symbol {
                Some(symbol) => format!("{} ({})", c.name, symbol),
                None => c.name.clone(),
            })
            .collect()
    }
}
