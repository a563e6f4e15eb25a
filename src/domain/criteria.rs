//! Filter and sort criteria driven by user input.
//!
//! Criteria are transient: they live in the controller for the lifetime of a
//! mounted view and are never persisted.

use crate::domain::error::{DirectoryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result ordering applied after filtering.
///
/// The wire tokens match the values the rendering collaborator sends back:
/// `""`, `name-asc`, `name-desc`, `employees-asc`, `employees-desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Keep source order.
    #[default]
    #[serde(rename = "", alias = "none")]
    None,
    NameAsc,
    NameDesc,
    EmployeesAsc,
    EmployeesDesc,
}

impl SortOption {
    /// All options in menu order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::NameAsc,
        Self::NameDesc,
        Self::EmployeesAsc,
        Self::EmployeesDesc,
    ];

    /// Wire token for this option.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::EmployeesAsc => "employees-asc",
            Self::EmployeesDesc => "employees-desc",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Sort",
            Self::NameAsc => "Name A → Z",
            Self::NameDesc => "Name Z → A",
            Self::EmployeesAsc => "Employees ↑",
            Self::EmployeesDesc => "Employees ↓",
        }
    }
}

impl FromStr for SortOption {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "none" => Ok(Self::None),
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            "employees-asc" => Ok(Self::EmployeesAsc),
            "employees-desc" => Ok(Self::EmployeesDesc),
            other => Err(DirectoryError::InvalidSort(other.to_string())),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to the query engine.
///
/// `search` is the settled (debounced) search text, not the raw keystrokes.
/// An empty `industry` means no industry filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryCriteria {
    pub search: String,
    pub industry: String,
    pub sort: SortOption,
}

impl QueryCriteria {
    /// Normalized search needle: trimmed and lower-cased. Empty disables the
    /// name filter.
    #[must_use]
    pub fn search_needle(&self) -> String {
        self.search.trim().to_lowercase()
    }
}
