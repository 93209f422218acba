//! Screen rendering.
//!
//! Every function here is pure: it takes core values plus a [`Theme`] and
//! returns the text to print. Themes only change colours and decorations.

use chrono::Local;
use serde::Serialize;

use atlas_core::domain::{
    CountryProfile, CountrySummary, DirectoryPage, EnrichmentBundle, WeatherSnapshot,
};

use crate::theme::Theme;

/// Shown in place of the card grid when the query matched nothing.
pub const NO_MATCHES: &str = "No countries found matching your criteria.";
pub const NO_IMAGES: &str = "No images available";
pub const NO_WEATHER: &str = "No weather data available";

/// `1234567` → `1,234,567`.
pub fn format_population(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Area in whole square kilometres with separators.
pub fn format_area(km2: f64) -> String {
    format!("{} km\u{b2}", format_population(km2.max(0.0).round() as u64))
}

// ── directory ─────────────────────────────────────────────────────────────────

/// One country card: name, capital, population and region.
pub fn country_card(country: &CountrySummary, theme: &Theme) -> String {
    format!(
        "{} {}  {}\n    Capital: {}\n    Population: {}\n    Region: {}",
        theme.bullet,
        theme.accent(&country.name),
        theme.muted(country.code.as_str()),
        country.capital_or_na(),
        format_population(country.population),
        theme.secondary(country.region.as_str()),
    )
}

/// `Showing X of Y countries`, plus `Page N of M` when there is more than one page.
pub fn page_summary(page: &DirectoryPage<'_>) -> String {
    let mut text = format!(
        "Showing {} of {} countries",
        page.items.len(),
        page.total_matches
    );
    if page.total_pages() > 1 {
        text.push_str(&format!("\nPage {} of {}", page.page, page.total_pages()));
    }
    text
}

/// The listing screen: cards followed by the paging footer.
pub fn directory_page(page: &DirectoryPage<'_>, theme: &Theme) -> String {
    if page.total_matches == 0 {
        return NO_MATCHES.to_string();
    }
    let mut blocks: Vec<String> = page
        .items
        .iter()
        .map(|country| country_card(country, theme))
        .collect();
    blocks.push(theme.muted(&page_summary(page)));
    blocks.join("\n\n")
}

/// `CODE  Name` per line.
pub fn directory_list(page: &DirectoryPage<'_>) -> String {
    page.items
        .iter()
        .map(|c| format!("{}  {}", c.code, c.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSV with a header row.
pub fn directory_csv(page: &DirectoryPage<'_>) -> String {
    let mut out = String::from("code,name,capital,region,population");
    for c in &page.items {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{},{}",
            c.code,
            csv_field(&c.name),
            csv_field(c.capital_or_na()),
            c.region,
            c.population
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[derive(Serialize)]
struct PageJson<'a> {
    page: usize,
    page_size: usize,
    total_pages: usize,
    total_matches: usize,
    countries: &'a [&'a CountrySummary],
}

/// The page and its totals as pretty JSON.
pub fn directory_json(page: &DirectoryPage<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PageJson {
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages(),
        total_matches: page.total_matches,
        countries: &page.items,
    })
}

// ── country page ──────────────────────────────────────────────────────────────

/// The full country page.
pub fn country_page(profile: &CountryProfile, theme: &Theme) -> String {
    let detail = &profile.detail;
    let summary = &detail.summary;
    let mut out = Vec::new();

    out.push(theme.accent(&format!("{}{}", summary.name, theme.title_mark)));
    if summary.has_distinct_official_name() {
        out.push(format!("Official: {}", summary.official_name));
    }
    let region = match &summary.subregion {
        Some(sub) => format!("{} \u{b7} {}", summary.region, sub),
        None => summary.region.to_string(),
    };
    out.push(theme.secondary(&region));
    out.push(theme.muted(&format!(
        "Flag: {} ({})",
        summary.flag.preferred(),
        summary.flag.alt_text(&summary.name)
    )));
    out.push(String::new());

    out.push(fact("Code", summary.code.as_str()));
    out.push(fact("Capital", summary.capital_or_na()));
    out.push(fact("Population", &format_population(summary.population)));
    out.push(fact("Area", &format_area(detail.area_km2)));
    out.push(fact("Languages", &or_none(detail.language_names().join(", "))));
    out.push(fact("Currencies", &or_none(detail.currency_labels().join(", "))));
    out.push(fact("Timezones", &or_none(detail.timezones.join(", "))));
    out.push(fact("Independent", yes_no(detail.independent)));
    out.push(fact("UN member", yes_no(detail.un_member)));
    out.push(fact("Drives on", detail.drives_on.as_str()));
    out.push(fact("Week starts", detail.week_starts_on.as_str()));
    out.push(String::new());

    out.extend(enrichment_sections(&summary.name, &profile.enrichment, theme));
    out.join("\n")
}

/// Shown when a mandatory load failed.
pub fn error_screen(message: &str, theme: &Theme) -> String {
    format!("{}\n  {}", theme.accent("Something went wrong"), message)
}

fn enrichment_sections(name: &str, bundle: &EnrichmentBundle, theme: &Theme) -> Vec<String> {
    let mut out = vec![
        theme.accent(&format!("About {name}{}", theme.about_mark)),
        bundle.summary.clone(),
        String::new(),
        theme.accent(&format!("Photo Gallery{}", theme.gallery_mark)),
    ];
    if bundle.photos.is_empty() {
        out.push(theme.muted(NO_IMAGES));
    } else {
        out.extend(
            bundle
                .photos
                .iter()
                .enumerate()
                .map(|(i, url)| format!("  {}. {url}", i + 1)),
        );
    }
    out.push(String::new());
    out.push(theme.accent("Current Weather"));
    match &bundle.weather {
        Some(weather) => out.extend(weather_lines(weather)),
        None => out.push(theme.muted(NO_WEATHER)),
    }
    out
}

fn weather_lines(weather: &WeatherSnapshot) -> Vec<String> {
    let mut lines = vec![
        format!("  Temp: {}\u{b0}C", weather.temperature_c),
        format!("  Condition: {}", weather.condition),
        format!("  Humidity: {}%", weather.humidity_pct),
        format!("  Wind: {} m/s", weather.wind_speed_ms),
    ];
    if let Some(at) = weather.observed_at {
        lines.push(format!(
            "  Observed: {}",
            at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ));
    }
    lines
}

fn fact(label: &str, value: &str) -> String {
    format!("  {:<12} {}", format!("{label}:"), value)
}

fn or_none(joined: String) -> String {
    if joined.is_empty() {
        "None".into()
    } else {
        joined
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::theme::ThemeName;
    use atlas_core::domain::{
        CountryCode, CountryDetail, Directory, DirectoryQuery, DriveSide, FlagImages, Region,
        WeekStart, NO_SUMMARY,
    };

    fn plain() -> Theme {
        Theme::new(ThemeName::Default, false)
    }

    fn summary(code: &str, name: &str, region: Region) -> CountrySummary {
        CountrySummary {
            code: CountryCode::parse(code).unwrap(),
            name: name.into(),
            official_name: name.into(),
            capital: None,
            region,
            subregion: None,
            population: 1_000,
            flag: FlagImages::new(Some(format!("https://flags.test/{code}.svg")), None, None)
                .unwrap(),
            capital_coordinates: None,
        }
    }

    fn profile() -> CountryProfile {
        let mut s = summary("FRA", "France", Region::Europe);
        s.official_name = "French Republic".into();
        s.capital = Some("Paris".into());
        s.subregion = Some("Western Europe".into());
        s.population = 67_391_582;
        CountryProfile {
            detail: CountryDetail {
                summary: s,
                area_km2: 551_695.0,
                languages: BTreeMap::from([("fra".into(), "French".into())]),
                currencies: BTreeMap::new(),
                timezones: vec!["UTC+01:00".into()],
                independent: true,
                un_member: true,
                drives_on: DriveSide::Right,
                week_starts_on: WeekStart::Monday,
            },
            enrichment: EnrichmentBundle::fallback(),
        }
    }

    fn alphabet(n: u8) -> Directory {
        Directory::new(
            (0..n)
                .map(|i| {
                    let letter = (b'A' + i) as char;
                    summary(&format!("{letter}{letter}{letter}"), &letter.to_string(), Region::Asia)
                })
                .collect(),
        )
    }

    #[test]
    fn population_has_thousands_separators() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1_000), "1,000");
        assert_eq!(format_population(67_391_582), "67,391,582");
    }

    #[test]
    fn card_shows_na_without_capital() {
        let card = country_card(&summary("ATA", "Antarctica", Region::Antarctic), &plain());
        assert!(card.contains("Capital: N/A"));
        assert!(card.contains("Region: Antarctic"));
    }

    #[test]
    fn single_page_has_no_page_counter() {
        let directory = alphabet(3);
        let page = directory.query(&DirectoryQuery::new("", None));
        assert_eq!(page_summary(&page), "Showing 3 of 3 countries");
    }

    #[test]
    fn last_page_of_sixteen() {
        let directory = alphabet(16);
        let page = directory.query(&DirectoryQuery::new("", None).page(2));
        assert_eq!(page_summary(&page), "Showing 1 of 16 countries\nPage 2 of 2");
    }

    #[test]
    fn empty_result_prints_no_matches() {
        let directory = alphabet(3);
        let page = directory.query(&DirectoryQuery::new("zzz", None));
        assert_eq!(directory_page(&page, &plain()), NO_MATCHES);
    }

    #[test]
    fn csv_quotes_commas() {
        let mut s = summary("KOR", "Korea, Republic of", Region::Asia);
        s.capital = Some("Seoul".into());
        let directory = Directory::new(vec![s]);
        let page = directory.query(&DirectoryQuery::new("", None));
        let csv = directory_csv(&page);
        assert!(csv.starts_with("code,name,capital,region,population\n"));
        assert!(csv.contains("KOR,\"Korea, Republic of\",Seoul,Asia,1000"));
    }

    #[test]
    fn json_carries_totals() {
        let directory = alphabet(16);
        let page = directory.query(&DirectoryQuery::new("", None).page(2));
        let value: serde_json::Value = serde_json::from_str(&directory_json(&page).unwrap()).unwrap();
        assert_eq!(value["total_matches"], 16);
        assert_eq!(value["total_pages"], 2);
        assert_eq!(value["countries"][0]["name"], "P");
    }

    #[test]
    fn country_page_shows_fallbacks() {
        let text = country_page(&profile(), &plain());
        assert!(text.contains("Official: French Republic"));
        assert!(text.contains("About France"));
        assert!(text.contains(NO_SUMMARY));
        assert!(text.contains(NO_IMAGES));
        assert!(text.contains(NO_WEATHER));
        assert!(text.contains("67,391,582"));
        assert!(text.contains("551,695 km\u{b2}"));
    }

    #[test]
    fn official_name_hidden_when_same() {
        let mut p = profile();
        p.detail.summary.official_name = "France".into();
        assert!(!country_page(&p, &plain()).contains("Official:"));
    }

    #[test]
    fn weather_and_gallery_render_when_present() {
        let mut p = profile();
        p.enrichment.photos = vec!["https://img.test/1.jpg".into()];
        p.enrichment.weather = Some(WeatherSnapshot {
            temperature_c: 22,
            condition: "clear sky".into(),
            humidity_pct: 40,
            wind_speed_ms: 3.5,
            observed_at: None,
        });
        let text = country_page(&p, &plain());
        assert!(text.contains("1. https://img.test/1.jpg"));
        assert!(text.contains("Temp: 22\u{b0}C"));
        assert!(text.contains("Humidity: 40%"));
        assert!(text.contains("Wind: 3.5 m/s"));
    }

    #[test]
    fn error_screen_carries_message() {
        let text = error_screen("Failed to load countries: HTTP 503", &plain());
        assert!(text.starts_with("Something went wrong"));
        assert!(text.contains("HTTP 503"));
    }

    #[test]
    fn halloween_decorates_headings() {
        let text = country_page(&profile(), &Theme::new(ThemeName::Halloween, false));
        assert!(text.contains("France \u{1f383}"));
        assert!(text.contains("About France \u{1f47b}"));
    }
}
