//! `atlas config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, EnrichmentMode},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(&redacted(config)).map_err(|e| {
                CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                }
            })?;
            output.data(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

const REDACTED: &str = "********";

fn redacted(config: &AppConfig) -> AppConfig {
    let mut shown = config.clone();
    for key in [
        &mut shown.providers.unsplash_access_key,
        &mut shown.providers.openweather_api_key,
    ] {
        if key.is_some() {
            *key = Some(REDACTED.into());
        }
    }
    shown
}

fn secret(key: &Option<String>) -> String {
    match key {
        Some(_) => REDACTED.into(),
        None => String::new(),
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let p = &config.providers;
    let value = match key {
        "providers.rest_countries_url" => p.rest_countries_url.clone(),
        "providers.wikipedia_url" => p.wikipedia_url.clone(),
        "providers.unsplash_url" => p.unsplash_url.clone(),
        "providers.openweather_url" => p.openweather_url.clone(),
        "providers.unsplash_access_key" => secret(&p.unsplash_access_key),
        "providers.openweather_api_key" => secret(&p.openweather_api_key),
        "directory.page_size" => config.directory.page_size.to_string(),
        "enrichment.mode" => match config.enrichment.mode {
            EnrichmentMode::Live => "live".into(),
            EnrichmentMode::Placeholder => "placeholder".into(),
        },
        "enrichment.photo_count" => config.enrichment.photo_count.to_string(),
        "enrichment.timeout_secs" => config.enrichment.timeout_secs.to_string(),
        "http.timeout_secs" => config.http.timeout_secs.to_string(),
        "http.user_agent" => config.http.user_agent.clone(),
        "output.no_color" => config.output.no_color.to_string(),
        "output.theme" => config.output.theme.to_string(),
        "logging.file" => config
            .logging
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        _ => return Err(CliError::UnknownConfigKey { key: key.into() }),
    };
    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "directory.page_size").unwrap(), "15");
        assert_eq!(get_config_value(&cfg, "output.theme").unwrap(), "default");
        assert_eq!(get_config_value(&cfg, "enrichment.mode").unwrap(), "live");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn api_keys_are_never_printed() {
        let mut cfg = AppConfig::default();
        cfg.providers.openweather_api_key = Some("abc123".into());
        assert_eq!(
            get_config_value(&cfg, "providers.openweather_api_key").unwrap(),
            REDACTED
        );
        assert_eq!(get_config_value(&cfg, "providers.unsplash_access_key").unwrap(), "");

        let listed = toml::to_string_pretty(&redacted(&cfg)).unwrap();
        assert!(!listed.contains("abc123"));
    }
}
