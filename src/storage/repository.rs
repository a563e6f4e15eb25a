//! Company repository.
//!
//! [`CompanyRepository`] is the single entry point for obtaining the company
//! list. It reads the raw document on a blocking thread, normalises its shape
//! and optionally waits a fixed delay before handing the records back.

use crate::domain::error::{DirectoryError, Result};
use crate::domain::Company;
use crate::storage::backend::CompanySource;
use crate::storage::json::parse_companies;
use std::sync::Arc;
use std::time::Duration;

/// Fetches the full company list from a [`CompanySource`].
///
/// Cloning shares the underlying source.
#[derive(Clone)]
pub struct CompanyRepository {
    source: Arc<dyn CompanySource>,
}

impl std::fmt::Debug for CompanyRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompanyRepository")
            .field("source", &self.source.describe())
            .finish()
    }
}

impl CompanyRepository {
    pub fn new(source: impl CompanySource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Retrieves every company, in document order.
    ///
    /// When `simulated_delay` is non-zero a successful result is held back for
    /// that long after the document has been parsed. Failures return as soon
    /// as they occur.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Transport`] if the document cannot be read
    /// - [`DirectoryError::Parse`] if it is not valid JSON
    /// - [`DirectoryError::Format`] if it has neither accepted shape
    /// - [`DirectoryError::Worker`] if the blocking read task panicked
    pub async fn fetch_all(&self, simulated_delay: Duration) -> Result<Vec<Company>> {
        let source = Arc::clone(&self.source);
        let location = source.describe();
        tracing::debug!(source = %location, delay = ?simulated_delay, "fetching companies");

        let document = tokio::task::spawn_blocking(move || source.read_document())
            .await
            .map_err(|e| DirectoryError::Worker(format!("document read task failed: {e}")))?;

        let companies = document.and_then(|text| parse_companies(&text)).map_err(|e| {
            tracing::warn!(source = %location, error = %e, "failed to fetch companies");
            e
        })?;

        if !simulated_delay.is_zero() {
            tokio::time::sleep(simulated_delay).await;
        }

        tracing::debug!(count = companies.len(), "companies fetched");
        Ok(companies)
    }
}
