//! Implementation of the `atlas list` command.

use tracing::info;

use atlas_core::domain::DirectoryQuery;

use crate::{
    cli::{ListArgs, ListFormat},
    commands::parse_region,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    providers::Providers,
    render,
};

pub async fn execute(args: ListArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let region = parse_region(args.region.as_deref())?;
    let page_size = args.page_size.unwrap_or(config.directory.page_size);

    let providers = Providers::from_config(config)?;
    let service = providers.directory_service();

    let spinner = output.spinner("Loading countries...");
    let loaded = service.load().await;
    spinner.finish_and_clear();
    let directory = loaded?;

    let query = DirectoryQuery::new(args.search, region)
        .page(args.page)
        .page_size(page_size);
    let page = service.query(&directory, &query);
    info!(
        matches = page.total_matches,
        page = page.page,
        shown = page.items.len(),
        "Directory queried"
    );

    match args.format {
        ListFormat::Table => output.print(&render::directory_page(&page, output.theme()))?,
        ListFormat::List => {
            if !page.is_empty() {
                output.data(&render::directory_list(&page))?;
            }
        }
        ListFormat::Json => output.data(&render::directory_json(&page)?)?,
        ListFormat::Csv => output.data(&render::directory_csv(&page))?,
    }

    Ok(())
}
