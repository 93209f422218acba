//! Directory Service - loads the country list and answers queries over it.
//!
//! Loading is the only fallible step. Once a [`Directory`] exists, queries
//! are pure and go straight to `Directory::query`.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::DirectorySource},
    domain::{Directory, DirectoryPage, DirectoryQuery, DomainValidator as validator},
    error::AtlasResult,
};

/// Service for the listing screen.
pub struct DirectoryService {
    source: Arc<dyn DirectorySource>,
}

impl DirectoryService {
    /// Create a new directory service.
    pub fn new(source: Arc<dyn DirectorySource>) -> Self {
        Self { source }
    }

    /// Fetch the whole country list and build a sorted directory.
    ///
    /// A failed fetch is a `DirectoryLoad` error; an empty list is a valid,
    /// empty directory. Records that break domain invariants are dropped.
    #[instrument(skip_all)]
    pub async fn load(&self) -> AtlasResult<Directory> {
        let fetched = self.source.fetch_all().await.map_err(|e| {
            warn!(error = %e, "Directory fetch failed");
            ApplicationError::DirectoryLoad {
                reason: e.to_string(),
            }
        })?;

        let fetched_count = fetched.len();
        let countries: Vec<_> = fetched
            .into_iter()
            .filter(|c| match validator::validate_summary(c) {
                Ok(()) => true,
                Err(e) => {
                    warn!(code = %c.code, error = %e, "Skipping invalid country record");
                    false
                }
            })
            .collect();

        info!(
            countries = countries.len(),
            skipped = fetched_count - countries.len(),
            "Directory loaded"
        );
        Ok(Directory::new(countries))
    }

    /// Run a query against an already loaded directory.
    pub fn query<'a>(&self, directory: &'a Directory, query: &DirectoryQuery) -> DirectoryPage<'a> {
        directory.query(query)
    }
}
