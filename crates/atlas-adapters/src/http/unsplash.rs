//! Unsplash photo search client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use atlas_core::application::ports::{PhotoSource, SourceError, SourceResult};

use super::{configured_key, endpoint, get_json};

pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Searches photos by free text; requires an access key.
#[derive(Debug, Clone)]
pub struct UnsplashPhotoClient {
    client: reqwest::Client,
    base_url: String,
    access_key: Option<String>,
}

impl UnsplashPhotoClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        access_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            access_key: configured_key(access_key),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.access_key.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<PhotoDto>,
}

#[derive(Debug, Deserialize)]
struct PhotoDto {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

#[async_trait]
impl PhotoSource for UnsplashPhotoClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: usize) -> SourceResult<Vec<String>> {
        let key = self
            .access_key
            .as_deref()
            .ok_or(SourceError::NotConfigured("photo search"))?;

        let url = endpoint(&self.base_url, &["search", "photos"])?;
        let per_page = limit.to_string();
        let request = self.client.get(url).query(&[
            ("query", query),
            ("per_page", per_page.as_str()),
            ("client_id", key),
        ]);

        let response: SearchResponse = get_json(request, "photo search").await?;
        let photos: Vec<String> = response
            .results
            .into_iter()
            .map(|photo| photo.urls.regular)
            .take(limit)
            .collect();

        debug!(count = photos.len(), "Photos found");
        Ok(photos)
    }
}
