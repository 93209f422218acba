//! Scripted enrichment sources.
//!
//! Each source answers every call with the same outcome, optionally after a
//! delay, and records what it was asked for.

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;

use atlas_core::{
    application::ports::{PhotoSource, SourceError, SourceResult, SummarySource, WeatherSource},
    domain::{Coordinates, WeatherReading},
};

#[derive(Clone)]
struct Script<T> {
    outcome: SourceResult<T>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl<T: Clone> Script<T> {
    fn new(outcome: SourceResult<T>) -> Self {
        Self {
            outcome,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    async fn play(&self, request: String) -> SourceResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

macro_rules! scripted_common {
    ($name:ident) => {
        impl $name {
            /// Delay every answer by `delay`.
            pub fn with_delay(mut self, delay: Duration) -> Self {
                self.0.delay = Some(delay);
                self
            }

            /// Number of calls answered so far.
            pub fn calls(&self) -> usize {
                self.0.calls()
            }

            /// Requests received so far, in call order.
            pub fn requests(&self) -> Vec<String> {
                self.0.requests()
            }
        }
    };
}

/// Encyclopedia summary with a fixed answer.
#[derive(Clone)]
pub struct StaticSummary(Script<Option<String>>);

impl StaticSummary {
    pub fn text(text: impl Into<String>) -> Self {
        Self(Script::new(Ok(Some(text.into()))))
    }

    /// The encyclopedia has no article.
    pub fn empty() -> Self {
        Self(Script::new(Ok(None)))
    }

    pub fn failing(error: SourceError) -> Self {
        Self(Script::new(Err(error)))
    }
}

scripted_common!(StaticSummary);

#[async_trait]
impl SummarySource for StaticSummary {
    async fn summary(&self, title: &str) -> SourceResult<Option<String>> {
        self.0.play(title.to_string()).await
    }
}

/// Photo search with a fixed gallery.
#[derive(Clone)]
pub struct StaticPhotos(Script<Vec<String>>);

impl StaticPhotos {
    pub fn urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(Script::new(Ok(urls.into_iter().map(Into::into).collect())))
    }

    pub fn failing(error: SourceError) -> Self {
        Self(Script::new(Err(error)))
    }
}

scripted_common!(StaticPhotos);

#[async_trait]
impl PhotoSource for StaticPhotos {
    async fn search(&self, query: &str, limit: usize) -> SourceResult<Vec<String>> {
        let mut photos = self.0.play(query.to_string()).await?;
        photos.truncate(limit);
        Ok(photos)
    }
}

/// Weather source with a fixed reading.
#[derive(Clone)]
pub struct StaticWeather(Script<WeatherReading>);

impl StaticWeather {
    pub fn reading(reading: WeatherReading) -> Self {
        Self(Script::new(Ok(reading)))
    }

    /// A reading with only a temperature and condition set.
    pub fn celsius(temperature_c: f64, condition: &str) -> Self {
        Self::reading(WeatherReading {
            temperature_c,
            condition: Some(condition.to_string()),
            humidity_pct: 50,
            wind_speed_ms: 2.0,
            observed_at: None,
        })
    }

    pub fn failing(error: SourceError) -> Self {
        Self(Script::new(Err(error)))
    }
}

scripted_common!(StaticWeather);

#[async_trait]
impl WeatherSource for StaticWeather {
    async fn current(&self, at: Coordinates) -> SourceResult<WeatherReading> {
        self.0
            .play(format!("{},{}", at.latitude, at.longitude))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_requests_and_calls() {
        let summary = StaticSummary::text("A country.");
        assert_eq!(
            summary.summary("France").await.unwrap().as_deref(),
            Some("A country.")
        );
        assert_eq!(summary.calls(), 1);
        assert_eq!(summary.requests(), vec!["France".to_string()]);
    }

    #[tokio::test]
    async fn photos_respect_limit() {
        let photos = StaticPhotos::urls(["a", "b", "c"]);
        assert_eq!(photos.search("x", 2).await.unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn clones_share_counters() {
        let weather = StaticWeather::failing(SourceError::Timeout);
        let handle = weather.clone();
        assert!(weather.current(Coordinates::new(1.0, 2.0)).await.is_err());
        assert_eq!(handle.calls(), 1);
        assert_eq!(handle.requests(), vec!["1,2".to_string()]);
    }
}
