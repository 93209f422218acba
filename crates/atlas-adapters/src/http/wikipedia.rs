//! Wikipedia REST summary client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use atlas_core::application::ports::{SourceError, SourceResult, SummarySource};

use super::{endpoint, get_json};

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";

/// Fetches the lead extract of an article by title.
#[derive(Debug, Clone)]
pub struct WikipediaSummaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl WikipediaSummaryClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: Option<String>,
}

#[async_trait]
impl SummarySource for WikipediaSummaryClient {
    #[instrument(skip(self))]
    async fn summary(&self, title: &str) -> SourceResult<Option<String>> {
        let url = endpoint(&self.base_url, &["page", "summary", title])?;

        match get_json::<PageSummary>(self.client.get(url), title).await {
            Ok(page) => Ok(page.extract.filter(|text| !text.trim().is_empty())),
            Err(SourceError::NotFound { .. }) => {
                debug!("No article for title");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
