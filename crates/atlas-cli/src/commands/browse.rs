//! Implementation of the `atlas browse` command.
//!
//! Two screens: the paged directory and a country page. Each screen keeps
//! its load in a [`LoadTracker`], so a failed load is shown with a
//! "Try Again" choice that re-runs the whole load for the same key.

use std::io::IsTerminal;

use dialoguer::{
    FuzzySelect, Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme as PromptTheme},
};
use tracing::debug;

use atlas_core::{
    application::{DetailService, DirectoryService, LoadState, LoadTracker},
    domain::{CountryCode, CountryProfile, Directory, DirectoryPage, DirectoryQuery, Region},
};

use crate::{
    cli::BrowseArgs,
    commands::parse_region,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    providers::Providers,
    render,
};

const TRY_AGAIN: &str = "Try Again";
const BACK: &str = "Back to Countries";
const QUIT: &str = "Quit";

/// What the directory menu asked for.
#[derive(Debug, Clone, PartialEq)]
enum Action {
    Open(CountryCode),
    NextPage,
    PreviousPage,
    Search,
    Region,
    Quit,
}

/// Where to go after leaving a country page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leave {
    Back,
    Quit,
}

struct Session<'a> {
    output: &'a OutputManager,
    prompt_theme: Box<dyn PromptTheme>,
    directory_service: DirectoryService,
    detail_service: DetailService,
    directory: LoadTracker<(), Directory>,
    detail: LoadTracker<CountryCode, CountryProfile>,
}

pub async fn execute(args: BrowseArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let region = parse_region(args.region.as_deref())?;

    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "browse needs an interactive terminal; use 'atlas list' or 'atlas show'"
                .into(),
            source: None,
        });
    }

    let providers = Providers::from_config(config)?;
    let prompt_theme: Box<dyn PromptTheme> = if output.supports_color() {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    };

    let mut session = Session {
        output,
        prompt_theme,
        directory_service: providers.directory_service(),
        detail_service: providers.detail_service(),
        directory: LoadTracker::new(),
        detail: LoadTracker::new(),
    };
    let query = DirectoryQuery::new(args.search, region).page_size(config.directory.page_size);

    session.run(query).await
}

impl Session<'_> {
    async fn run(&mut self, mut query: DirectoryQuery) -> CliResult<()> {
        let Some(directory) = self.load_directory().await? else {
            return Ok(());
        };

        loop {
            let (labels, actions) = {
                let page = directory.query(&query);
                self.output
                    .print(&render::directory_page(&page, self.output.theme()))?;
                menu(&page)
            };

            let choice = FuzzySelect::with_theme(&*self.prompt_theme)
                .with_prompt("Pick a country or an action")
                .items(&labels)
                .default(0)
                .interact_opt()?;

            let action = choice
                .and_then(|i| actions.get(i).cloned())
                .unwrap_or(Action::Quit);
            debug!(?action, page = query.page, "Browse action");

            match action {
                Action::Open(code) => {
                    if self.open_country(code).await? == Leave::Quit {
                        return Ok(());
                    }
                }
                Action::NextPage => query.page += 1,
                Action::PreviousPage => query.page = query.page.saturating_sub(1).max(1),
                Action::Search => {
                    query.filter_text = Input::<String>::with_theme(&*self.prompt_theme)
                        .with_prompt("Search for a country...")
                        .with_initial_text(query.filter_text.clone())
                        .allow_empty(true)
                        .interact_text()?;
                    query.page = 1;
                }
                Action::Region => {
                    query.region = self.pick_region(query.region)?;
                    query.page = 1;
                }
                Action::Quit => return Ok(()),
            }
        }
    }

    /// Load the directory, offering a retry until it succeeds or the user quits.
    async fn load_directory(&mut self) -> CliResult<Option<Directory>> {
        let mut key = Some(());
        while let Some(()) = key.take() {
            let ticket = self.directory.begin(());
            let spinner = self.output.spinner("Loading countries...");
            let result = self.directory_service.load().await;
            spinner.finish_and_clear();
            self.directory.finish(ticket, result);

            match self.directory.state() {
                LoadState::Loaded(directory) => return Ok(Some(directory.clone())),
                LoadState::Failed(message) => {
                    self.output
                        .print(&render::error_screen(message, self.output.theme()))?;
                    if self.choose(&[TRY_AGAIN, QUIT])? == Some(0) {
                        key = self.directory.retry_key().cloned();
                    }
                }
                LoadState::Idle | LoadState::Pending => {}
            }
        }
        Ok(None)
    }

    /// Show one country page until the user goes back or quits.
    async fn open_country(&mut self, code: CountryCode) -> CliResult<Leave> {
        let mut next = Some(code);
        let mut leave = Leave::Back;

        while let Some(code) = next.take() {
            let ticket = self.detail.begin(code);
            let spinner = self.output.spinner(format!("Loading {}...", ticket.key()));
            let result = self.detail_service.load_detail(ticket.key()).await;
            spinner.finish_and_clear();
            self.detail.finish(ticket, result);

            match self.detail.state() {
                LoadState::Loaded(profile) => {
                    self.output
                        .print(&render::country_page(profile, self.output.theme()))?;
                    if self.choose(&[BACK, QUIT])? != Some(0) {
                        leave = Leave::Quit;
                    }
                }
                LoadState::Failed(message) => {
                    self.output
                        .print(&render::error_screen(message, self.output.theme()))?;
                    match self.choose(&[TRY_AGAIN, BACK, QUIT])? {
                        Some(0) => next = self.detail.retry_key().cloned(),
                        Some(1) => {}
                        _ => leave = Leave::Quit,
                    }
                }
                LoadState::Idle | LoadState::Pending => {}
            }
        }

        self.detail.invalidate();
        Ok(leave)
    }

    fn pick_region(&self, current: Option<Region>) -> CliResult<Option<Region>> {
        let mut labels = vec!["All regions"];
        labels.extend(Region::ALL.iter().map(Region::as_str));
        let selected = current
            .and_then(|r| Region::ALL.iter().position(|x| *x == r))
            .map_or(0, |i| i + 1);

        let choice = Select::with_theme(&*self.prompt_theme)
            .with_prompt("Filter by region")
            .items(&labels)
            .default(selected)
            .interact_opt()?;

        Ok(match choice {
            Some(0) => None,
            Some(i) => Region::ALL.get(i - 1).copied(),
            None => current,
        })
    }

    fn choose(&self, options: &[&str]) -> CliResult<Option<usize>> {
        Ok(Select::with_theme(&*self.prompt_theme)
            .items(options)
            .default(0)
            .interact_opt()?)
    }
}

/// Menu entries for one directory page: its countries, then navigation.
fn menu(page: &DirectoryPage<'_>) -> (Vec<String>, Vec<Action>) {
    let mut labels = Vec::with_capacity(page.items.len() + 5);
    let mut actions = Vec::with_capacity(page.items.len() + 5);

    for country in &page.items {
        labels.push(format!("{} ({})", country.name, country.code));
        actions.push(Action::Open(country.code.clone()));
    }
    if page.has_next() {
        labels.push("Next page \u{2192}".into());
        actions.push(Action::NextPage);
    }
    if page.has_previous() {
        labels.push("\u{2190} Previous page".into());
        actions.push(Action::PreviousPage);
    }
    labels.push("Search...".into());
    actions.push(Action::Search);
    labels.push("Region...".into());
    actions.push(Action::Region);
    labels.push(QUIT.into());
    actions.push(Action::Quit);

    (labels, actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::domain::{CountrySummary, FlagImages};

    fn directory(n: u8) -> Directory {
        Directory::new(
            (0..n)
                .map(|i| {
                    let letter = (b'A' + i) as char;
                    let code = format!("{letter}{letter}{letter}");
                    CountrySummary {
                        code: CountryCode::parse(&code).unwrap(),
                        name: letter.to_string(),
                        official_name: letter.to_string(),
                        capital: None,
                        region: Region::Europe,
                        subregion: None,
                        population: 1,
                        flag: FlagImages::new(None, Some(format!("https://f.test/{code}.png")), None)
                            .unwrap(),
                        capital_coordinates: None,
                    }
                })
                .collect(),
        )
    }

    #[test]
    fn first_page_offers_next_but_not_previous() {
        let directory = directory(16);
        let page = directory.query(&DirectoryQuery::new("", None));
        let (labels, actions) = menu(&page);
        assert_eq!(labels.len(), actions.len());
        assert_eq!(actions[0], Action::Open(CountryCode::parse("AAA").unwrap()));
        assert!(actions.contains(&Action::NextPage));
        assert!(!actions.contains(&Action::PreviousPage));
    }

    #[test]
    fn last_page_offers_previous_only() {
        let directory = directory(16);
        let page = directory.query(&DirectoryQuery::new("", None).page(2));
        let (_, actions) = menu(&page);
        assert_eq!(actions[0], Action::Open(CountryCode::parse("PPP").unwrap()));
        assert!(actions.contains(&Action::PreviousPage));
        assert!(!actions.contains(&Action::NextPage));
    }

    #[test]
    fn empty_page_still_offers_search_and_quit() {
        let directory = directory(3);
        let page = directory.query(&DirectoryQuery::new("zzz", None));
        let (labels, actions) = menu(&page);
        assert_eq!(actions, vec![Action::Search, Action::Region, Action::Quit]);
        assert_eq!(labels.last().map(String::as_str), Some(QUIT));
    }
}
