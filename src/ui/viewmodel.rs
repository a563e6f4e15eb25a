//! View model types representing one render cycle of the directory.
//!
//! This module defines immutable view models computed from application state.
//! The rendering collaborator consumes them as-is: every label, count and flag
//! it needs is pre-computed here, so no business logic leaks into rendering.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()`. They borrow
//! nothing from the state and can be sent across threads.
//!
//! # Example
//!
//! ```rust
//! use company_directory::ui::viewmodel::PaginationInfo;
//!
//! let info = PaginationInfo::new(3, 3, 25, 10);
//! assert_eq!((info.showing_start, info.showing_end), (21, 25));
//! assert!(info.has_previous);
//! assert!(!info.has_next);
//! ```

use crate::app::LoadStatus;
use crate::domain::{Company, SortOption};
use serde::Serialize;

/// Page heading.
pub const TITLE: &str = "Companies Directory";

/// Text shown while the company list is loading.
pub const LOADING_MESSAGE: &str = "Loading companies...";

/// Label of the "no industry filter" option.
pub const ALL_INDUSTRIES_OPTION: &str = "All";

/// Filter summary when no industry is selected.
pub const ALL_INDUSTRIES_SUMMARY: &str = "All Industries";

/// Placeholder for an unknown employee count.
pub const UNKNOWN_EMPLOYEES: &str = "—";

/// Link target used when a company has no website.
pub const NO_WEBSITE: &str = "#";

/// Placeholder text for a company without an image.
pub const NO_IMAGE: &str = "No image";

/// Complete view model for one render cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryViewModel {
    /// Page heading.
    pub title: &'static str,

    /// Current load phase.
    pub status: LoadStatus,

    /// Loading message, present only while a load is in flight.
    pub loading: Option<&'static str>,

    /// Error banner, present only after a failed load.
    pub error: Option<ErrorBanner>,

    /// Raw search text as typed, before debouncing.
    pub search: String,

    /// Selected industry, `""` for all.
    pub selected_industry: String,

    /// Industry dropdown entries, starting with "All".
    pub industry_options: Vec<SelectOption>,

    /// "All Industries" or the selected industry.
    pub filter_summary: String,

    /// Selected sort option.
    pub selected_sort: SortOption,

    /// Sort dropdown entries in menu order.
    pub sort_options: Vec<SelectOption>,

    /// Cards for the current page.
    pub cards: Vec<CompanyCard>,

    /// Page position and navigation flags.
    pub pagination: PaginationInfo,

    /// Empty-result message, present only when loaded and the page is empty.
    pub empty_state: Option<EmptyState>,
}

/// One entry in a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Text shown to the user.
    pub label: String,

    /// Value reported back when chosen.
    pub value: String,

    /// Whether this entry is the current selection.
    pub selected: bool,
}

/// Error banner with a retry affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBanner {
    pub title: &'static str,
    pub message: String,
    pub can_retry: bool,
}

impl ErrorBanner {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: "Error",
            message: message.into(),
            can_retry: true,
        }
    }
}

/// Message shown when the current page has no companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: "No companies found",
            message: "Try adjusting your filters or search term.",
        }
    }
}

/// Display-ready form of one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyCard {
    pub id: i64,
    pub name: String,

    /// `"{industry} • {location}"`.
    pub subtitle: String,

    pub description: Option<String>,

    /// `"{n} employees"`, or `"— employees"` when unknown.
    pub employees: String,

    /// Website URL, or `"#"`.
    pub website: String,

    /// Image URL.
    pub image: Option<String>,

    /// Placeholder text when there is no image.
    pub image_placeholder: Option<&'static str>,
}

impl From<&Company> for CompanyCard {
    fn from(company: &Company) -> Self {
        let employees = company
            .employees
            .map_or_else(|| UNKNOWN_EMPLOYEES.to_string(), |n| n.to_string());

        Self {
            id: company.id,
            name: company.name.clone(),
            subtitle: format!("{} • {}", company.industry, company.location),
            description: company.description.clone(),
            employees: format!("{employees} employees"),
            website: company.website.clone().unwrap_or_else(|| NO_WEBSITE.to_string()),
            image: company.image.clone(),
            image_placeholder: company.image.is_none().then_some(NO_IMAGE),
        }
    }
}

/// Page position and navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    /// Current page, 1-based.
    pub page: usize,
    pub total_pages: usize,

    /// Items across all pages.
    pub total: usize,

    /// 1-based index of the first item shown, 0 when nothing is shown.
    pub showing_start: usize,

    /// 1-based index of the last item shown, 0 when nothing is shown.
    pub showing_end: usize,

    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationInfo {
    /// Computes the "showing X - Y of Z" range and navigation flags.
    #[must_use]
    pub fn new(page: usize, total_pages: usize, total: usize, page_size: usize) -> Self {
        let first = page.saturating_sub(1).saturating_mul(page_size);
        let (showing_start, showing_end) = if first >= total {
            (0, 0)
        } else {
            (first + 1, page.saturating_mul(page_size).min(total))
        };

        Self {
            page,
            total_pages,
            total,
            showing_start,
            showing_end,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }
}
