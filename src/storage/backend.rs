//! Static resource abstraction.
//!
//! This module defines the [`CompanySource`] trait: where the raw companies
//! document comes from. Sources return the document text untouched; shape
//! normalisation lives in [`crate::storage::json::parse_companies`] so every
//! source accepts exactly the same formats.

use crate::domain::error::Result;

/// Provider of the raw companies document.
///
/// Implementations are read from a blocking worker thread, so they must be
/// `Send + Sync` and may block.
///
/// # Implementations
///
/// - [`JsonFileSource`](crate::storage::JsonFileSource): a file under a static web root
/// - [`StaticSource`](crate::storage::StaticSource): a document held in memory
///
/// # Examples
///
/// ```
/// use company_directory::storage::{CompanySource, StaticSource};
///
/// let source = StaticSource::new(r#"[{"id": 1, "name": "Acme"}]"#);
/// assert!(source.read_document()?.starts_with('['));
/// # Ok::<(), company_directory::DirectoryError>(())
/// ```
pub trait CompanySource: Send + Sync {
    /// Reads the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Transport`](crate::DirectoryError::Transport)
    /// when the resource cannot be read.
    fn read_document(&self) -> Result<String>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}
