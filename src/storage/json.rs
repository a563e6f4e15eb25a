//! JSON document handling for the companies resource.
//!
//! The static resource is accepted in two shapes:
//!
//! ```json
//! [ { "id": 1, "name": "Acme", ... }, ... ]
//! ```
//!
//! or wrapped:
//!
//! ```json
//! { "companies": [ { "id": 1, "name": "Acme", ... }, ... ] }
//! ```
//!
//! Anything else is a [`DirectoryError::Format`].

use crate::domain::error::{DirectoryError, Result};
use crate::domain::Company;
use crate::storage::backend::CompanySource;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Field holding the array in the wrapped shape.
const WRAPPER_FIELD: &str = "companies";

/// Parses a companies document, normalising both accepted shapes.
///
/// Records are returned in document order.
///
/// # Errors
///
/// - [`DirectoryError::Parse`] if the text is not JSON or a record is malformed
/// - [`DirectoryError::Format`] if the JSON has neither accepted shape
///
/// # Examples
///
/// ```
/// use company_directory::storage::parse_companies;
///
/// let wrapped = parse_companies(r#"{"companies": [{"id": 1, "name": "Acme"}]}"#)?;
/// assert_eq!(wrapped[0].name, "Acme");
///
/// assert!(parse_companies(r#"{"foo": 1}"#).unwrap_err().is_format());
/// # Ok::<(), company_directory::DirectoryError>(())
/// ```
pub fn parse_companies(document: &str) -> Result<Vec<Company>> {
    let _span = tracing::debug_span!("parse_companies", bytes = document.len()).entered();

    let value: Value = serde_json::from_str(document)?;

    let records = match value {
        Value::Array(records) => records,
        Value::Object(mut object) => match object.remove(WRAPPER_FIELD) {
            Some(Value::Array(records)) => records,
            _ => {
                tracing::debug!("object document without a companies array");
                return Err(DirectoryError::Format);
            }
        },
        _ => {
            tracing::debug!("document is neither an array nor an object");
            return Err(DirectoryError::Format);
        }
    };

    let companies = records
        .into_iter()
        .map(serde_json::from_value::<Company>)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    tracing::debug!(count = companies.len(), "companies parsed");
    Ok(companies)
}

/// Reads the companies document from a file under a static web root.
///
/// # Examples
///
/// ```no_run
/// use company_directory::storage::{CompanySource, JsonFileSource};
///
/// let source = JsonFileSource::new("public/companies.json");
/// let document = source.read_document()?;
/// # Ok::<(), company_directory::DirectoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    file_path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source for the given file. The file is not touched until the
    /// first read.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Path of the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl CompanySource for JsonFileSource {
    fn read_document(&self) -> Result<String> {
        let _span = tracing::debug_span!("json_read_document", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;

        tracing::debug!(bytes = contents.len(), "document read");
        Ok(contents)
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}
