//! In-memory adapters for testing and offline wiring.

mod countries;
mod enrichment;

pub use countries::InMemoryCountries;
pub use enrichment::{StaticPhotos, StaticSummary, StaticWeather};

#[cfg(test)]
pub(crate) mod sample {
    use std::collections::BTreeMap;

    use atlas_core::domain::{
        Coordinates, CountryCode, CountryDetail, CountrySummary, DriveSide, FlagImages, Region,
        WeekStart,
    };

    pub fn country(code: &str, name: &str, region: Region) -> CountryDetail {
        CountryDetail {
            summary: CountrySummary {
                code: CountryCode::parse(code).unwrap(),
                name: name.into(),
                official_name: name.into(),
                capital: Some(format!("{name} City")),
                region,
                subregion: None,
                population: 1_000_000,
                flag: FlagImages::new(Some(format!("https://flags.test/{code}.svg")), None, None)
                    .unwrap(),
                capital_coordinates: Some(Coordinates::new(10.0, 20.0)),
            },
            area_km2: 1000.0,
            languages: BTreeMap::new(),
            currencies: BTreeMap::new(),
            timezones: Vec::new(),
            independent: true,
            un_member: true,
            drives_on: DriveSide::Right,
            week_starts_on: WeekStart::Monday,
        }
    }
}
