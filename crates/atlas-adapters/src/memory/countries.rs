//! In-memory country data serving both country ports.

use std::sync::{
    Arc, RwLock,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use atlas_core::{
    application::ports::{CountrySource, DirectorySource, SourceError, SourceResult},
    domain::{CountryCode, CountryDetail, CountrySummary},
};

/// Thread-safe fixed list of countries.
///
/// `fail_with` scripts an error for every subsequent call until
/// [`InMemoryCountries::recover`] clears it.
#[derive(Clone, Default)]
pub struct InMemoryCountries {
    inner: Arc<RwLock<Vec<CountryDetail>>>,
    failure: Arc<RwLock<Option<SourceError>>>,
    list_calls: Arc<AtomicUsize>,
    detail_calls: Arc<AtomicUsize>,
}

impl InMemoryCountries {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `countries`.
    pub fn with_countries(countries: impl IntoIterator<Item = CountryDetail>) -> Self {
        let store = Self::new();
        for country in countries {
            store.insert(country);
        }
        store
    }

    /// Add or replace a country by code.
    pub fn insert(&self, country: CountryDetail) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        inner.retain(|c| c.summary.code != country.summary.code);
        inner.push(country);
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|c| c.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make every following call fail with `error`.
    pub fn fail_with(&self, error: SourceError) {
        *self.failure.write().unwrap_or_else(|e| e.into_inner()) = Some(error);
    }

    /// Stop failing.
    pub fn recover(&self) {
        *self.failure.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Number of `fetch_all` calls served so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of `fetch_country` calls served so far.
    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    fn scripted_failure(&self) -> SourceResult<()> {
        match self.failure.read().unwrap_or_else(|e| e.into_inner()).as_ref() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DirectorySource for InMemoryCountries {
    async fn fetch_all(&self) -> SourceResult<Vec<CountrySummary>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.scripted_failure()?;

        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        Ok(inner.iter().map(|c| c.summary.clone()).collect())
    }
}

#[async_trait]
impl CountrySource for InMemoryCountries {
    async fn fetch_country(&self, code: &CountryCode) -> SourceResult<CountryDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.scripted_failure()?;

        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner
            .iter()
            .find(|c| &c.summary.code == code)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                resource: format!("country {code}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::sample::country;
    use atlas_core::domain::Region;

    #[tokio::test]
    async fn serves_inserted_countries() {
        let store = InMemoryCountries::with_countries([
            country("FRA", "France", Region::Europe),
            country("JPN", "Japan", Region::Asia),
        ]);

        assert_eq!(store.fetch_all().await.unwrap().len(), 2);
        let japan = store
            .fetch_country(&CountryCode::parse("jpn").unwrap())
            .await
            .unwrap();
        assert_eq!(japan.name(), "Japan");
        assert_eq!(store.list_calls(), 1);
        assert_eq!(store.detail_calls(), 1);
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let store = InMemoryCountries::new();
        let err = store
            .fetch_country(&CountryCode::parse("XYZ").unwrap())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn scripted_failure_until_recovered() {
        let store = InMemoryCountries::with_countries([country("FRA", "France", Region::Europe)]);
        store.fail_with(SourceError::Timeout);
        assert_eq!(store.fetch_all().await.unwrap_err(), SourceError::Timeout);

        store.recover();
        assert!(store.fetch_all().await.is_ok());
    }

    #[test]
    fn insert_replaces_same_code() {
        let store = InMemoryCountries::new();
        store.insert(country("FRA", "France", Region::Europe));
        store.insert(country("FRA", "French Republic", Region::Europe));
        assert_eq!(store.len(), 1);
    }
}
