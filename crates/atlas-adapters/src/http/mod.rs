//! HTTP adapters for the public country, encyclopedia, photo and weather APIs.
//!
//! Every client shares one `reqwest::Client` configured through
//! [`HttpSettings`], and every response goes through [`get_json`] so that
//! status codes and decoding failures map onto [`SourceError`] the same way.

pub mod openweather;
pub mod rest_countries;
pub mod unsplash;
pub mod wikipedia;

pub use openweather::OpenWeatherClient;
pub use rest_countries::RestCountriesClient;
pub use unsplash::UnsplashPhotoClient;
pub use wikipedia::WikipediaSummaryClient;

use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use atlas_core::application::ports::{SourceError, SourceResult};

pub const DEFAULT_USER_AGENT: &str = concat!("atlas/", env!("CARGO_PKG_VERSION"));

/// Shared transport settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Build the client every adapter shares.
pub fn build_client(settings: &HttpSettings) -> SourceResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(settings.timeout)
        .user_agent(settings.user_agent.as_str())
        .build()
        .map_err(|e| SourceError::Transport(format!("could not build HTTP client: {e}")))
}

/// Map a `reqwest` failure onto the port error vocabulary.
pub(crate) fn map_transport(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        SourceError::Timeout
    } else if err.is_decode() {
        SourceError::Malformed(err.to_string())
    } else {
        SourceError::Transport(err.to_string())
    }
}

/// Send `request` and decode a JSON body.
///
/// A 404 becomes `NotFound { resource }`, any other non-success status
/// becomes `Status`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    resource: &str,
) -> SourceResult<T> {
    let response = request.send().await.map_err(map_transport)?;
    let status = response.status();
    debug!(%status, resource, "Provider responded");

    if status == StatusCode::NOT_FOUND {
        return Err(SourceError::NotFound {
            resource: resource.to_string(),
        });
    }
    if !status.is_success() {
        return Err(SourceError::Status {
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(map_transport)?;
    serde_json::from_slice(&body).map_err(|e| SourceError::Malformed(e.to_string()))
}

/// Parse a base URL and append path segments, percent-encoding each one.
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> SourceResult<Url> {
    let mut url = Url::parse(base)
        .map_err(|e| SourceError::Transport(format!("invalid base URL '{base}': {e}")))?;
    url.path_segments_mut()
        .map_err(|()| SourceError::Transport(format!("base URL '{base}' cannot take a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Treat an empty or whitespace-only key as absent.
pub(crate) fn configured_key(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_encoded_segments() {
        let url = endpoint("https://en.wikipedia.org/api/rest_v1/", &["page", "summary", "Åland Islands"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/%C3%85land%20Islands"
        );
    }

    #[test]
    fn endpoint_without_trailing_slash() {
        let url = endpoint("https://restcountries.com/v3.1", &["alpha", "FRA"]).unwrap();
        assert_eq!(url.as_str(), "https://restcountries.com/v3.1/alpha/FRA");
    }

    #[test]
    fn endpoint_rejects_garbage_base() {
        assert!(matches!(
            endpoint("not a url", &["x"]),
            Err(SourceError::Transport(_))
        ));
    }

    #[test]
    fn blank_keys_are_not_configured() {
        assert_eq!(configured_key(Some("  ".into())), None);
        assert_eq!(configured_key(None), None);
        assert_eq!(configured_key(Some(" abc ".into())), Some("abc".into()));
    }

    #[test]
    fn default_client_builds() {
        assert!(build_client(&HttpSettings::default()).is_ok());
    }
}
