//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `ATLAS__SECTION__KEY` (a `.env` file is honoured)
//! 3. Config file (`--config` or the platform config directory)
//! 4. Built-in defaults (always present)

use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use atlas_adapters::http::{
    DEFAULT_USER_AGENT, HttpSettings, openweather, rest_countries, unsplash, wikipedia,
};
use atlas_core::{
    application::{DEFAULT_PHOTO_COUNT, EnrichmentOptions},
    domain::DEFAULT_PAGE_SIZE,
};

use crate::theme::ThemeName;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Endpoints and credentials of the data providers.
    pub providers: ProvidersConfig,
    /// Listing settings.
    pub directory: DirectoryConfig,
    /// Country page enrichment settings.
    pub enrichment: EnrichmentConfig,
    /// Shared HTTP client settings.
    pub http: HttpConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Log file settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    pub rest_countries_url: String,
    pub wikipedia_url: String,
    pub unsplash_url: String,
    pub openweather_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsplash_access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openweather_api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub page_size: usize,
}

/// Where photos and weather come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentMode {
    /// Unsplash and OpenWeatherMap.
    #[default]
    Live,
    /// Key-less placeholder photos and weather.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    pub mode: EnrichmentMode,
    pub photo_count: usize,
    /// Per-enrichment deadline in seconds; 0 disables it.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub theme: ThemeName,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write logs to this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            providers: ProvidersConfig {
                rest_countries_url: rest_countries::DEFAULT_BASE_URL.into(),
                wikipedia_url: wikipedia::DEFAULT_BASE_URL.into(),
                unsplash_url: unsplash::DEFAULT_BASE_URL.into(),
                openweather_url: openweather::DEFAULT_BASE_URL.into(),
                unsplash_access_key: None,
                openweather_api_key: None,
            },
            directory: DirectoryConfig {
                page_size: DEFAULT_PAGE_SIZE,
            },
            enrichment: EnrichmentConfig {
                mode: EnrichmentMode::Live,
                photo_count: DEFAULT_PHOTO_COUNT,
                timeout_secs: 15,
            },
            http: HttpConfig {
                timeout_secs: 10,
                user_agent: DEFAULT_USER_AGENT.into(),
            },
            output: OutputConfig {
                no_color: false,
                theme: ThemeName::Default,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. Without
    /// it the platform path is read when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let config = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix("ATLAS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.atlas.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "atlas", "atlas")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".atlas.toml"))
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            timeout: Duration::from_secs(self.http.timeout_secs),
            user_agent: self.http.user_agent.clone(),
        }
    }

    pub fn enrichment_options(&self) -> EnrichmentOptions {
        EnrichmentOptions {
            photo_count: self.enrichment.photo_count,
            primary_timeout: None,
            enrichment_timeout: (self.enrichment.timeout_secs > 0)
                .then(|| Duration::from_secs(self.enrichment.timeout_secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_page_size_is_fifteen() {
        assert_eq!(AppConfig::default().directory.page_size, 15);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn default_keys_are_absent() {
        let cfg = AppConfig::default();
        assert!(cfg.providers.unsplash_access_key.is_none());
        assert!(cfg.providers.openweather_api_key.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[directory]\npage_size = 5\n\n[output]\ntheme = \"halloween\"\n\n\
             [enrichment]\nmode = \"placeholder\""
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.directory.page_size, 5);
        assert_eq!(cfg.output.theme, ThemeName::Halloween);
        assert_eq!(cfg.enrichment.mode, EnrichmentMode::Placeholder);
        // untouched keys keep their defaults
        assert_eq!(cfg.http.timeout_secs, 10);
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let missing = PathBuf::from("/definitely/not/here/atlas.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn default_config_serialises_to_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[providers]"));
        assert!(text.contains("page_size = 15"));
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn zero_enrichment_timeout_disables_deadline() {
        let mut cfg = AppConfig::default();
        cfg.enrichment.timeout_secs = 0;
        assert!(cfg.enrichment_options().enrichment_timeout.is_none());
        assert_eq!(cfg.enrichment_options().photo_count, 12);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
