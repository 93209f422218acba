//! End-to-end service tests wired with in-memory and placeholder adapters.

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use atlas_adapters::{
    InMemoryCountries, PlaceholderPhotos, PlaceholderWeather, StaticPhotos, StaticSummary,
    StaticWeather,
};
use atlas_core::{
    application::{
        DetailService, DetailSources, DirectoryService, EnrichmentOptions, LoadState, LoadTracker,
        ports::SourceError,
    },
    domain::{
        Coordinates, CountryCode, CountryDetail, CountrySummary, DirectoryQuery, DriveSide,
        FlagImages, NO_SUMMARY, Region, WeekStart,
    },
    error::AtlasError,
};

fn country(code: &str, name: &str, region: Region, capital: Option<(f64, f64)>) -> CountryDetail {
    CountryDetail {
        summary: CountrySummary {
            code: CountryCode::parse(code).unwrap(),
            name: name.into(),
            official_name: name.into(),
            capital: capital.map(|_| format!("{name} City")),
            region,
            subregion: None,
            population: 42,
            flag: FlagImages::new(None, Some(format!("https://flags.test/{code}.png")), None)
                .unwrap(),
            capital_coordinates: capital.map(|(lat, lon)| Coordinates::new(lat, lon)),
        },
        area_km2: 10.0,
        languages: BTreeMap::new(),
        currencies: BTreeMap::new(),
        timezones: vec!["UTC".into()],
        independent: true,
        un_member: false,
        drives_on: DriveSide::Left,
        week_starts_on: WeekStart::Sunday,
    }
}

fn world() -> InMemoryCountries {
    InMemoryCountries::with_countries([
        country("PER", "Peru", Region::Americas, Some((-12.05, -77.05))),
        country("FIN", "Finland", Region::Europe, Some((60.17, 24.93))),
        country("ALA", "Åland Islands", Region::Europe, Some((60.12, 19.9))),
        country("ISL", "Iceland", Region::Europe, Some((64.15, -21.95))),
        country("IRL", "Ireland", Region::Europe, Some((53.32, -6.23))),
        country("ATA", "Antarctica", Region::Antarctic, None),
    ])
}

fn sources(
    countries: &InMemoryCountries,
    summary: &StaticSummary,
    photos: &StaticPhotos,
    weather: &StaticWeather,
) -> DetailSources {
    DetailSources {
        country: Arc::new(countries.clone()),
        summary: Arc::new(summary.clone()),
        photos: Arc::new(photos.clone()),
        weather: Arc::new(weather.clone()),
    }
}

fn code(raw: &str) -> CountryCode {
    CountryCode::parse(raw).unwrap()
}

// ── Directory ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn directory_search_and_region_filter() {
    let service = DirectoryService::new(Arc::new(world()));
    let directory = service.load().await.unwrap();

    let page = service.query(&directory, &DirectoryQuery::new("land", Some(Region::Europe)));
    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Åland Islands", "Finland", "Iceland", "Ireland"]);
    assert_eq!(page.total_matches, 4);
    assert_eq!(page.total_pages(), 1);

    let none = service.query(&directory, &DirectoryQuery::new("zzz", None));
    assert!(none.is_empty());
    assert_eq!(none.total_pages(), 0);
}

#[tokio::test]
async fn directory_failure_then_retry() {
    let countries = world();
    countries.fail_with(SourceError::Transport("connection refused".into()));
    let service = DirectoryService::new(Arc::new(countries.clone()));

    let err = service.load().await.unwrap_err();
    assert!(err.is_retryable());

    countries.recover();
    assert_eq!(service.load().await.unwrap().len(), 6);
    assert_eq!(countries.list_calls(), 2);
}

// ── Detail aggregation ───────────────────────────────────────────────────────

#[tokio::test]
async fn detail_merges_all_sources() {
    let countries = world();
    let summary = StaticSummary::text("Peru is a country in South America.");
    let photos = StaticPhotos::urls(["https://img.test/1.jpg", "https://img.test/2.jpg"]);
    let weather = StaticWeather::celsius(18.5, "Clouds");
    let service = DetailService::new(
        sources(&countries, &summary, &photos, &weather),
        EnrichmentOptions::default(),
    );

    let profile = service.load_detail(&code("PER")).await.unwrap();

    assert_eq!(profile.detail.name(), "Peru");
    assert_eq!(profile.enrichment.summary, "Peru is a country in South America.");
    assert_eq!(profile.enrichment.photos.len(), 2);
    let snapshot = profile.enrichment.weather.unwrap();
    assert_eq!(snapshot.temperature_c, 19);
    assert_eq!(snapshot.condition, "Clouds");
    assert_eq!(summary.requests(), vec!["Peru".to_string()]);
    assert_eq!(photos.requests(), vec!["Peru".to_string()]);
    assert_eq!(weather.requests(), vec!["-12.05,-77.05".to_string()]);
}

#[tokio::test]
async fn unknown_code_touches_no_enrichment_source() {
    let countries = world();
    let summary = StaticSummary::text("unused");
    let photos = StaticPhotos::urls(["unused"]);
    let weather = StaticWeather::celsius(0.0, "unused");
    let service = DetailService::new(
        sources(&countries, &summary, &photos, &weather),
        EnrichmentOptions::default(),
    );

    let err = service.load_detail(&code("XYZ")).await.unwrap_err();
    assert!(matches!(err, AtlasError::Application(_)));
    assert!(!err.is_retryable());
    assert_eq!(summary.calls() + photos.calls() + weather.calls(), 0);
}

#[tokio::test]
async fn failing_enrichment_becomes_fallbacks() {
    let countries = world();
    let summary = StaticSummary::failing(SourceError::Status { status: 500 });
    let photos = StaticPhotos::failing(SourceError::NotConfigured("photo search"));
    let weather = StaticWeather::failing(SourceError::Timeout);
    let service = DetailService::new(
        sources(&countries, &summary, &photos, &weather),
        EnrichmentOptions::default(),
    );

    let profile = service.load_detail(&code("FIN")).await.unwrap();
    assert_eq!(profile.enrichment.summary, NO_SUMMARY);
    assert!(profile.enrichment.photos.is_empty());
    assert!(profile.enrichment.weather.is_none());
}

#[tokio::test]
async fn country_without_capital_skips_weather() {
    let countries = world();
    let summary = StaticSummary::empty();
    let photos = StaticPhotos::urls(Vec::<String>::new());
    let weather = StaticWeather::celsius(-30.0, "Snow");
    let service = DetailService::new(
        sources(&countries, &summary, &photos, &weather),
        EnrichmentOptions::default(),
    );

    let profile = service.load_detail(&code("ATA")).await.unwrap();
    assert_eq!(profile.detail.summary.capital_or_na(), "N/A");
    assert!(profile.enrichment.weather.is_none());
    assert_eq!(weather.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn slow_enrichment_runs_in_parallel() {
    let countries = world();
    let delay = Duration::from_millis(800);
    let summary = StaticSummary::text("text").with_delay(delay);
    let photos = StaticPhotos::urls(["a"]).with_delay(delay);
    let weather = StaticWeather::celsius(1.0, "Clear").with_delay(delay);
    let service = DetailService::new(
        sources(&countries, &summary, &photos, &weather),
        EnrichmentOptions::default(),
    );

    let started = tokio::time::Instant::now();
    service.load_detail(&code("ISL")).await.unwrap();
    assert!(started.elapsed() < Duration::from_millis(1600));
}

#[tokio::test]
async fn placeholder_sources_fill_every_field() {
    let countries = world();
    let service = DetailService::new(
        DetailSources {
            country: Arc::new(countries),
            summary: Arc::new(StaticSummary::empty()),
            photos: Arc::new(PlaceholderPhotos::default()),
            weather: Arc::new(PlaceholderWeather),
        },
        EnrichmentOptions {
            photo_count: 4,
            ..EnrichmentOptions::default()
        },
    );

    let profile = service.load_detail(&code("IRL")).await.unwrap();
    assert_eq!(profile.enrichment.photos.len(), 4);
    assert!(profile.enrichment.weather.is_some());
}

// ── Load lifecycle ───────────────────────────────────────────────────────────

#[tokio::test]
async fn navigating_away_discards_the_late_result() {
    let countries = world();
    let summary = StaticSummary::empty();
    let photos = StaticPhotos::urls(Vec::<String>::new());
    let weather = StaticWeather::celsius(5.0, "Rain");
    let service = DetailService::new(
        sources(&countries, &summary, &photos, &weather),
        EnrichmentOptions::default(),
    );
    let mut tracker = LoadTracker::new();

    let first = tracker.begin(code("FIN"));
    let second = tracker.begin(code("IRL"));

    let late = service.load_detail(first.key()).await;
    let current = service.load_detail(second.key()).await;

    assert!(!tracker.finish(first, late));
    assert!(tracker.finish(second, current));
    match tracker.state() {
        LoadState::Loaded(profile) => assert_eq!(profile.detail.name(), "Ireland"),
        other => panic!("unexpected state {other:?}"),
    }
}
