//! In-memory companies document.

use crate::domain::error::Result;
use crate::storage::backend::CompanySource;
use std::sync::Arc;

/// A companies document held in memory, e.g. embedded with `include_str!`.
///
/// Cloning is cheap; clones share the same text.
#[derive(Debug, Clone)]
pub struct StaticSource {
    document: Arc<str>,
}

impl StaticSource {
    pub fn new(document: impl Into<Arc<str>>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl CompanySource for StaticSource {
    fn read_document(&self) -> Result<String> {
        Ok(self.document.to_string())
    }

    fn describe(&self) -> String {
        format!("<static document, {} bytes>", self.document.len())
    }
}
