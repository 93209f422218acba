//! REST Countries v3.1 client: the directory and per-country records.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use atlas_core::{
    application::ports::{CountrySource, DirectorySource, SourceError, SourceResult},
    domain::{
        Coordinates, CountryCode, CountryDetail, CountrySummary, Currency, DomainError,
        DriveSide, FlagImages, Region, WeekStart,
    },
};

use super::{endpoint, get_json};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Field projection requested for the directory listing.
const LIST_FIELDS: &str =
    "name,cca3,capital,capitalInfo,region,subregion,population,flags,languages,currencies";

/// Client for `restcountries.com`, serving both country ports.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestCountriesClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl DirectorySource for RestCountriesClient {
    #[instrument(skip(self), fields(base = %self.base_url))]
    async fn fetch_all(&self) -> SourceResult<Vec<CountrySummary>> {
        let url = endpoint(&self.base_url, &["all"])?;
        let request = self.client.get(url).query(&[("fields", LIST_FIELDS)]);
        // Each record decodes on its own; an undecodable one is skipped.
        let records: Vec<serde_json::Value> = get_json(request, "country list").await?;

        let total = records.len();
        let countries: Vec<CountrySummary> = records
            .into_iter()
            .filter_map(|value| {
                let code = value
                    .get("cca3")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("?")
                    .to_string();
                serde_json::from_value::<CountryRecord>(value)
                    .map_err(|e| e.to_string())
                    .and_then(|record| CountrySummary::try_from(record).map_err(|e| e.to_string()))
                    .inspect_err(|e| warn!(code = %code, error = %e, "Skipping unmappable country record"))
                    .ok()
            })
            .collect();

        debug!(total, mapped = countries.len(), "Country list decoded");
        Ok(countries)
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    #[instrument(skip(self), fields(code = %code))]
    async fn fetch_country(&self, code: &CountryCode) -> SourceResult<CountryDetail> {
        let resource = format!("country {code}");
        let url = endpoint(&self.base_url, &["alpha", code.as_str()])?;
        let records: Vec<CountryRecord> = get_json(self.client.get(url), &resource).await?;

        let record = records
            .into_iter()
            .next()
            .ok_or(SourceError::NotFound { resource })?;

        CountryDetail::try_from(record).map_err(|e| SourceError::Malformed(e.to_string()))
    }
}

// ── Wire format ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: NameDto,
    cca3: String,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default, rename = "capitalInfo")]
    capital_info: CapitalInfoDto,
    region: String,
    #[serde(default)]
    subregion: Option<String>,
    #[serde(default)]
    population: u64,
    flags: FlagsDto,
    #[serde(default)]
    languages: BTreeMap<String, String>,
    #[serde(default)]
    currencies: BTreeMap<String, CurrencyDto>,
    #[serde(default)]
    area: Option<f64>,
    #[serde(default)]
    timezones: Vec<String>,
    #[serde(default)]
    independent: Option<bool>,
    #[serde(default, rename = "unMember")]
    un_member: Option<bool>,
    #[serde(default)]
    car: Option<CarDto>,
    #[serde(default, rename = "startOfWeek")]
    start_of_week: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NameDto {
    common: String,
    #[serde(default)]
    official: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CapitalInfoDto {
    #[serde(default)]
    latlng: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct FlagsDto {
    #[serde(default)]
    svg: Option<String>,
    #[serde(default)]
    png: Option<String>,
    #[serde(default)]
    alt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrencyDto {
    name: String,
    #[serde(default)]
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CarDto {
    #[serde(default)]
    side: Option<String>,
}

impl TryFrom<CountryRecord> for CountrySummary {
    type Error = DomainError;

    fn try_from(record: CountryRecord) -> Result<Self, Self::Error> {
        let official_name = record
            .name
            .official
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| record.name.common.clone());

        let summary = CountrySummary {
            code: CountryCode::parse(&record.cca3)?,
            name: record.name.common,
            official_name,
            capital: record.capital.into_iter().next(),
            region: record.region.parse::<Region>()?,
            subregion: record.subregion.filter(|s| !s.trim().is_empty()),
            population: record.population,
            flag: FlagImages::new(record.flags.svg, record.flags.png, record.flags.alt)?,
            capital_coordinates: Coordinates::from_pair(&record.capital_info.latlng),
        };
        summary.validate()?;
        Ok(summary)
    }
}

impl TryFrom<CountryRecord> for CountryDetail {
    type Error = DomainError;

    fn try_from(mut record: CountryRecord) -> Result<Self, Self::Error> {
        let languages = std::mem::take(&mut record.languages);
        let currencies = std::mem::take(&mut record.currencies)
            .into_iter()
            .map(|(code, c)| {
                (
                    code,
                    Currency {
                        name: c.name,
                        symbol: c.symbol.filter(|s| !s.is_empty()),
                    },
                )
            })
            .collect();
        let timezones = std::mem::take(&mut record.timezones);
        let area_km2 = record.area.unwrap_or_default();
        let independent = record.independent.unwrap_or(false);
        let un_member = record.un_member.unwrap_or(false);
        let drives_on = match record.car.take().and_then(|car| car.side) {
            Some(side) => side.parse::<DriveSide>()?,
            None => DriveSide::Right,
        };
        let week_starts_on = match record.start_of_week.take() {
            Some(day) => day.parse::<WeekStart>()?,
            None => WeekStart::Monday,
        };

        Ok(CountryDetail {
            summary: CountrySummary::try_from(record)?,
            area_km2,
            languages,
            currencies,
            timezones,
            independent,
            un_member,
            drives_on,
            week_starts_on,
        })
    }
}
