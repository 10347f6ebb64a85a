//! Databases found by the AI service's discovery scan.

#[cfg(test)]
#[path = "databases_test.rs"]
mod databases_test;

use crate::error::ApiError;
use crate::net::types::{DatabaseCatalog, DiscoveredDatabase};

#[derive(Clone, Debug, Default)]
pub struct DatabasesState {
    pub databases: Vec<DiscoveredDatabase>,
    pub summary: String,
    pub loading: bool,
    /// A rediscovery scan is running.
    pub rescanning: bool,
    pub error: Option<String>,
}

impl DatabasesState {
    /// Mark a fetch (or a rescan) as started. Returns `false` when one is
    /// already running.
    pub fn begin(&mut self, rescan: bool) -> bool {
        if self.loading || self.rescanning {
            return false;
        }
        if rescan {
            self.rescanning = true;
        } else {
            self.loading = true;
        }
        self.error = None;
        true
    }

    pub fn finish(&mut self, result: Result<DatabaseCatalog, ApiError>) {
        self.loading = false;
        self.rescanning = false;
        match result {
            Ok(catalog) => {
                self.databases = catalog.databases;
                self.summary = catalog.summary;
            }
            Err(e) => {
                log::warn!("databases: fetch failed ({}): {e}", e.error_code());
                self.error = Some(e.to_string());
            }
        }
    }

    /// Seed from the `/chat/init` payload without touching the summary.
    pub fn seed(&mut self, databases: Vec<DiscoveredDatabase>) {
        if !databases.is_empty() {
            self.databases = databases;
        }
    }

    #[must_use]
    pub fn busy(&self) -> bool {
        self.loading || self.rescanning
    }
}
