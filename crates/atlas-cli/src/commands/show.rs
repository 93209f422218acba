//! Implementation of the `atlas show` command.

use atlas_core::{domain::CountryCode, error::AtlasError};

use crate::{
    cli::{DetailFormat, ShowArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    providers::Providers,
    render,
};

pub async fn execute(args: ShowArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let code = CountryCode::parse(&args.code).map_err(AtlasError::from)?;

    let service = Providers::from_config(config)?.detail_service();

    let spinner = output.spinner(format!("Loading {code}..."));
    let loaded = service.load_detail(&code).await;
    spinner.finish_and_clear();
    let profile = loaded?;

    match args.format {
        DetailFormat::Human => output.print(&render::country_page(&profile, output.theme()))?,
        DetailFormat::Json => output.data(&serde_json::to_string_pretty(&profile)?)?,
    }

    Ok(())
}
