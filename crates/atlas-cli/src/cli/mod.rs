//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "atlas",
    bin_name = "atlas",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f30d} Explore the countries of the world",
    long_about = "Atlas lists, searches and pages through every country, and \
                  opens a country page with facts, a summary, photos and the \
                  current weather at the capital.",
    after_help = "EXAMPLES:\n\
        \x20 atlas list --search land --region europe\n\
        \x20 atlas list --page 3 --format csv\n\
        \x20 atlas show FIN\n\
        \x20 atlas browse --theme halloween\n\
        \x20 atlas completions bash > /usr/share/bash-completion/completions/atlas",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search, filter and page through the country directory.
    #[command(
        visible_alias = "ls",
        about = "List countries",
        after_help = "EXAMPLES:\n\
            \x20 atlas list\n\
            \x20 atlas list -s united\n\
            \x20 atlas list -r asia -p 2\n\
            \x20 atlas list --format json"
    )]
    List(ListArgs),

    /// Show one country's page.
    #[command(
        about = "Show a country",
        after_help = "EXAMPLES:\n\
            \x20 atlas show FRA\n\
            \x20 atlas show jpn --format json"
    )]
    Show(ShowArgs),

    /// Browse interactively.
    #[command(
        about = "Browse countries interactively",
        after_help = "EXAMPLES:\n\
            \x20 atlas browse\n\
            \x20 atlas browse --region oceania"
    )]
    Browse(BrowseArgs),

    /// Initialise an Atlas configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 atlas init\n\
            \x20 atlas init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 atlas completions bash > ~/.local/share/bash-completion/completions/atlas\n\
            \x20 atlas completions zsh  > ~/.zfunc/_atlas\n\
            \x20 atlas completions fish > ~/.config/fish/completions/atlas.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Atlas configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 atlas config get directory.page_size\n\
            \x20 atlas config list\n\
            \x20 atlas config path"
    )]
    Config(ConfigCommands),
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `atlas list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of the country name.
    #[arg(
        short = 's',
        long = "search",
        value_name = "TEXT",
        default_value = "",
        hide_default_value = true,
        help = "Filter by name"
    )]
    pub search: String,

    /// Region filter; omit for all regions.
    #[arg(
        short = 'r',
        long = "region",
        value_name = "REGION",
        help = "Filter by region (Africa, Americas, Antarctic, Asia, Europe, Oceania)"
    )]
    pub region: Option<String>,

    /// 1-based page number.
    #[arg(
        short = 'p',
        long = "page",
        value_name = "N",
        default_value_t = 1,
        help = "Page number"
    )]
    pub page: usize,

    /// Countries per page; defaults to `directory.page_size`.
    #[arg(long = "page-size", value_name = "N", help = "Countries per page")]
    pub page_size: Option<usize>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Country cards with paging footer.
    Table,
    /// One `CODE  Name` per line.
    List,
    /// JSON object with the page and its totals.
    Json,
    /// CSV rows.
    Csv,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `atlas show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Three-letter country code (ISO 3166-1 alpha-3).
    #[arg(value_name = "CODE", help = "Country code, e.g. FRA")]
    pub code: String,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: DetailFormat,
}

/// Output format for the `show` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DetailFormat {
    /// Themed country page.
    Human,
    /// The merged profile as JSON.
    Json,
}

// ── browse ────────────────────────────────────────────────────────────────────

/// Arguments for `atlas browse`.
#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Initial search text.
    #[arg(
        short = 's',
        long = "search",
        value_name = "TEXT",
        default_value = "",
        hide_default_value = true,
        help = "Initial name filter"
    )]
    pub search: String,

    /// Initial region filter.
    #[arg(short = 'r', long = "region", value_name = "REGION", help = "Initial region filter")]
    pub region: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `atlas init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `atlas completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `atlas config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `directory.page_size`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
