//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the state owned by one mounted directory
//! view. It is the single source of truth for the loaded companies, the
//! filter/sort criteria, the current page and the load lifecycle.
//!
//! # Architecture
//!
//! `AppState` separates source data (the full company set) from derived state
//! (the filtered/sorted result and the industry list). Derived state is
//! recomputed explicitly, and only when one of its inputs changes:
//!
//! | Derived        | Recomputed when                                   |
//! |----------------|---------------------------------------------------|
//! | `industries`   | the company set changes                           |
//! | `filtered`     | the company set, settled search, industry or sort |
//! | current page   | `filtered` or `page` changes (sliced on demand)   |
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use company_directory::app::AppState;
//!
//! let state = AppState::new(NonZeroUsize::new(10).unwrap(), 350, 200);
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.pagination.total_pages, 1);
//! ```

use super::modes::LoadStatus;
use crate::domain::{distinct_industries, paginate, query, total_pages, Company, Page, QueryCriteria, SortOption};
use crate::ui::viewmodel::{
    CompanyCard, DirectoryViewModel, EmptyState, ErrorBanner, PaginationInfo, SelectOption,
    ALL_INDUSTRIES_OPTION, ALL_INDUSTRIES_SUMMARY, LOADING_MESSAGE, TITLE,
};
use crate::worker::WorkerMessage;
use crate::Config;
use std::num::NonZeroUsize;

/// State of one mounted directory view.
///
/// Mutated only by [`handle_event`](crate::app::handle_event).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full company set from the last successful load.
    ///
    /// Never reordered or filtered in place. Empty until loaded and after a
    /// failed load.
    pub companies: Vec<Company>,

    /// `query(companies, criteria)`, cached.
    pub filtered: Vec<Company>,

    /// Distinct non-empty industries of `companies`, sorted.
    pub industries: Vec<String>,

    /// Search text as typed. Feeds the debouncer; the settled value lands in
    /// `criteria.search`.
    pub search_input: String,

    /// Criteria the query engine currently runs with.
    pub criteria: QueryCriteria,

    /// Current page, 1-based.
    pub page: usize,

    pub page_size: NonZeroUsize,

    pub status: LoadStatus,

    /// Message of the last failed load.
    pub error: Option<String>,

    /// Whether the owning view is mounted. Outcomes arriving while unmounted
    /// are discarded.
    pub mounted: bool,

    /// Identifier of the load whose outcome will be applied, if any.
    pub in_flight: Option<u64>,

    /// Simulated latency for the load started on mount.
    pub initial_load_delay_ms: u64,

    /// Simulated latency for user-triggered retries.
    pub retry_load_delay_ms: u64,

    next_load_id: u64,
}

impl AppState {
    /// Creates an unmounted, idle state with default criteria.
    #[must_use]
    pub const fn new(page_size: NonZeroUsize, initial_load_delay_ms: u64, retry_load_delay_ms: u64) -> Self {
        Self {
            companies: Vec::new(),
            filtered: Vec::new(),
            industries: Vec::new(),
            search_input: String::new(),
            criteria: QueryCriteria {
                search: String::new(),
                industry: String::new(),
                sort: SortOption::None,
            },
            page: 1,
            page_size,
            status: LoadStatus::Idle,
            error: None,
            mounted: false,
            in_flight: None,
            initial_load_delay_ms,
            retry_load_delay_ms,
            next_load_id: 1,
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.page_size, config.initial_load_delay_ms, config.retry_load_delay_ms)
    }

    /// Enters `Loading` and returns the message that starts the load.
    ///
    /// Clears any previous error. The new load id supersedes whatever was in
    /// flight, so an older outcome will be discarded when it arrives.
    pub fn begin_load(&mut self, simulated_delay_ms: u64) -> WorkerMessage {
        let load_id = self.next_load_id;
        self.next_load_id += 1;

        if let Some(previous) = self.in_flight.replace(load_id) {
            tracing::debug!(previous, load_id, "superseding in-flight load");
        }

        self.status = LoadStatus::Loading;
        self.error = None;

        tracing::debug!(load_id, simulated_delay_ms, "load started");
        WorkerMessage::load_companies(load_id, simulated_delay_ms)
    }

    /// Stores a freshly loaded company set and enters `Ready`.
    pub fn apply_loaded(&mut self, companies: Vec<Company>) {
        self.companies = companies;
        self.status = LoadStatus::Ready;
        self.error = None;
        self.recompute_industries();
        self.recompute_query();
        self.clamp_page();

        tracing::debug!(
            total = self.companies.len(),
            visible = self.filtered.len(),
            page = self.page,
            "companies applied"
        );
    }

    /// Records a failed load and enters `Failed`.
    ///
    /// The company set is cleared so stale data is never shown next to the
    /// error.
    pub fn apply_failed(&mut self, message: String) {
        self.companies.clear();
        self.filtered.clear();
        self.industries.clear();
        self.page = 1;
        self.status = LoadStatus::Failed;
        self.error = Some(message);
    }

    /// Re-runs the query engine over the full set.
    pub fn recompute_query(&mut self) {
        self.filtered = query(&self.companies, &self.criteria);
    }

    pub fn recompute_industries(&mut self) {
        self.industries = distinct_industries(&self.companies);
    }

    /// Page count for the current result, never less than 1.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), self.page_size)
    }

    /// Clamps `page` into `1..=total_pages`. Returns whether it changed.
    pub fn clamp_page(&mut self) -> bool {
        self.set_page(self.page)
    }

    /// Moves to `page`, clamped into `1..=total_pages`. Returns whether the
    /// page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let clamped = page.clamp(1, self.total_pages());
        let changed = clamped != self.page;
        self.page = clamped;
        changed
    }

    /// Slice of `filtered` on the current page.
    #[must_use]
    pub fn current_page(&self) -> Page<'_, Company> {
        paginate(&self.filtered, self.page, self.page_size)
    }

    /// Computes the render-ready view model for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DirectoryViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", status = ?self.status, page = self.page).entered();

        let page = self.current_page();
        let cards: Vec<CompanyCard> = page.slice.iter().map(CompanyCard::from).collect();

        let empty_state = (self.status.is_ready() && cards.is_empty()).then(EmptyState::default);

        DirectoryViewModel {
            title: TITLE,
            status: self.status,
            loading: self.status.is_loading().then_some(LOADING_MESSAGE),
            error: self
                .error
                .as_ref()
                .filter(|_| self.status.is_failed())
                .map(ErrorBanner::new),
            search: self.search_input.clone(),
            selected_industry: self.criteria.industry.clone(),
            industry_options: self.industry_options(),
            filter_summary: self.filter_summary(),
            selected_sort: self.criteria.sort,
            sort_options: self.sort_options(),
            cards,
            pagination: PaginationInfo::new(self.page, page.total_pages, page.total, self.page_size.get()),
            empty_state,
        }
    }

    fn industry_options(&self) -> Vec<SelectOption> {
        let selected = &self.criteria.industry;

        std::iter::once(SelectOption {
            label: ALL_INDUSTRIES_OPTION.to_string(),
            value: String::new(),
            selected: selected.is_empty(),
        })
        .chain(self.industries.iter().map(|industry| SelectOption {
            label: industry.clone(),
            value: industry.clone(),
            selected: industry == selected,
        }))
        .collect()
    }

    fn sort_options(&self) -> Vec<SelectOption> {
        SortOption::ALL
            .iter()
            .map(|&option| SelectOption {
                label: option.label().to_string(),
                value: option.as_str().to_string(),
                selected: option == self.criteria.sort,
            })
            .collect()
    }

    fn filter_summary(&self) -> String {
        if self.criteria.industry.is_empty() {
            ALL_INDUSTRIES_SUMMARY.to_string()
        } else {
            self.criteria.industry.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(NonZeroUsize::new(10).unwrap(), 350, 200)
    }

    fn companies(n: i64) -> Vec<Company> {
        (1..=n)
            .map(|i| Company::new(i, format!("Company {i:02}"), "Town", if i % 2 == 0 { "Even" } else { "Odd" }))
            .collect()
    }

    #[test]
    fn load_ids_increase() {
        let mut state = state();
        let first = state.begin_load(350);
        let second = state.begin_load(200);

        assert!(second.load_id() > first.load_id());
        assert_eq!(state.in_flight, Some(second.load_id()));
        assert_eq!(state.status, LoadStatus::Loading);
    }

    #[test]
    fn begin_load_clears_error() {
        let mut state = state();
        state.apply_failed("boom".into());
        state.begin_load(0);
        assert_eq!(state.error, None);
    }

    #[test]
    fn loaded_companies_derive_industries_and_result() {
        let mut state = state();
        state.apply_loaded(companies(25));

        assert_eq!(state.industries, ["Even", "Odd"]);
        assert_eq!(state.filtered.len(), 25);
        assert_eq!(state.total_pages(), 3);
    }

    #[test]
    fn failure_clears_data() {
        let mut state = state();
        state.apply_loaded(companies(5));
        state.apply_failed("boom".into());

        assert!(state.companies.is_empty());
        assert!(state.filtered.is_empty());
        assert!(state.industries.is_empty());
        assert_eq!(state.status, LoadStatus::Failed);
    }

    #[test]
    fn load_clamps_stale_page() {
        let mut state = state();
        state.apply_loaded(companies(25));
        state.set_page(3);

        state.apply_loaded(companies(4));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn set_page_clamps() {
        let mut state = state();
        state.apply_loaded(companies(25));

        assert!(state.set_page(99));
        assert_eq!(state.page, 3);
        assert!(state.set_page(0));
        assert_eq!(state.page, 1);
        assert!(!state.set_page(1));
    }

    #[test]
    fn viewmodel_for_last_page() {
        let mut state = state();
        state.apply_loaded(companies(25));
        state.set_page(3);

        let vm = state.compute_viewmodel();
        assert_eq!(vm.cards.len(), 5);
        assert_eq!(vm.pagination.total_pages, 3);
        assert_eq!((vm.pagination.showing_start, vm.pagination.showing_end), (21, 25));
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.loading, None);
    }

    #[test]
    fn viewmodel_while_loading() {
        let mut state = state();
        state.begin_load(350);

        let vm = state.compute_viewmodel();
        assert_eq!(vm.loading, Some("Loading companies..."));
        assert!(vm.empty_state.is_none());
        assert!(vm.error.is_none());
    }

    #[test]
    fn viewmodel_after_failure() {
        let mut state = state();
        state.begin_load(350);
        state.apply_failed("Unexpected companies.json format".into());

        let vm = state.compute_viewmodel();
        let banner = vm.error.unwrap();
        assert_eq!(banner.title, "Error");
        assert_eq!(banner.message, "Unexpected companies.json format");
        assert!(banner.can_retry);
        assert!(vm.cards.is_empty());
    }

    #[test]
    fn viewmodel_empty_dataset() {
        let mut state = state();
        state.apply_loaded(vec![]);

        let vm = state.compute_viewmodel();
        assert_eq!(vm.industry_options.len(), 1);
        assert_eq!(vm.industry_options[0].label, "All");
        assert_eq!(vm.pagination.total_pages, 1);
        assert_eq!(vm.empty_state, Some(EmptyState::default()));
    }

    #[test]
    fn viewmodel_menus_mark_selection() {
        let mut state = state();
        state.apply_loaded(companies(3));
        state.criteria.industry = "Odd".into();
        state.criteria.sort = SortOption::EmployeesDesc;
        state.recompute_query();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.filter_summary, "Odd");

        let selected: Vec<_> = vm.industry_options.iter().filter(|o| o.selected).map(|o| o.value.as_str()).collect();
        assert_eq!(selected, ["Odd"]);

        let sort: Vec<_> = vm.sort_options.iter().filter(|o| o.selected).map(|o| o.label.as_str()).collect();
        assert_eq!(sort, ["Employees ↓"]);
        assert_eq!(vm.sort_options[0].label, "Sort");
    }
}
