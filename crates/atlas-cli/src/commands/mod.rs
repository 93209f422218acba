//! Command handlers, one module per subcommand.

#[cfg(feature = "interactive")]
pub mod browse;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod show;

use atlas_core::{domain::Region, error::AtlasError};

use crate::error::CliResult;

/// Parse an optional `--region` value; blank means no filter.
pub(crate) fn parse_region(raw: Option<&str>) -> CliResult<Option<Region>> {
    Ok(Region::parse_filter(raw.unwrap_or_default()).map_err(AtlasError::from)?)
}
