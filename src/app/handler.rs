//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes lifecycle events,
//! user input and worker responses, translating them into state changes and
//! action sequences. It is the only place where [`AppState`] is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the view, the debouncer or the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `Unmount`, `Retry`
//! - **Criteria**: `SearchChanged`, `SearchSettled`, `IndustrySelected`, `SortSelected`
//! - **Navigation**: `GoToPage`, `FirstPage`, `PreviousPage`, `NextPage`, `LastPage`
//! - **Worker**: `WorkerResponse` carrying a load outcome
//!
//! Changing the settled search, the industry or the sort always resets the
//! page to 1. Setting a criterion to its current value changes nothing.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use company_directory::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::new(NonZeroUsize::new(10).unwrap(), 350, 200);
//! let (render, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(render);
//! assert!(matches!(actions[..], [Action::PostToWorker(_)]));
//! # Ok::<(), company_directory::DirectoryError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::SortOption;
use crate::worker::WorkerResponse;

/// Events triggered by the view lifecycle, user input or worker responses.
///
/// The handler processes these sequentially, so state transitions are
/// deterministic for a given event order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The view was mounted. Starts the initial load.
    Mount,

    /// The view was torn down. Outstanding outcomes will be discarded.
    Unmount,

    /// User asked to load again.
    Retry,

    /// Raw search text changed (one keystroke).
    SearchChanged(String),

    /// The debounced search text settled.
    SearchSettled(String),

    /// Industry filter chosen, `""` for all.
    IndustrySelected(String),

    SortSelected(SortOption),

    /// Jump to a page. Clamped into range.
    GoToPage(usize),
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,

    /// Outcome of a background load.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag tells the runtime whether the view model changed and
/// should be re-rendered.
///
/// While unmounted, only `Mount` and worker responses are looked at; worker
/// responses are discarded.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for fallible transitions.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if !state.mounted && !matches!(event, Event::Mount | Event::WorkerResponse(_)) {
        tracing::debug!("view not mounted, ignoring event");
        return Ok((false, vec![]));
    }

    match event {
        Event::Mount => {
            if state.mounted {
                tracing::debug!("already mounted");
                return Ok((false, vec![]));
            }
            state.mounted = true;
            let message = state.begin_load(state.initial_load_delay_ms);
            Ok((true, vec![Action::PostToWorker(message)]))
        }
        Event::Unmount => {
            tracing::debug!(in_flight = ?state.in_flight, "unmounting");
            state.mounted = false;
            state.in_flight = None;
            Ok((false, vec![Action::CancelDebounce]))
        }
        Event::Retry => {
            let message = state.begin_load(state.retry_load_delay_ms);
            Ok((true, vec![Action::PostToWorker(message)]))
        }
        Event::SearchChanged(text) => {
            if &state.search_input == text {
                return Ok((false, vec![]));
            }
            state.search_input.clone_from(text);
            tracing::trace!(query = %text, "search input updated");
            Ok((true, vec![Action::DebounceSearch(text.clone())]))
        }
        Event::SearchSettled(text) => {
            if &state.criteria.search == text {
                return Ok((false, vec![]));
            }
            state.criteria.search.clone_from(text);
            Ok((criteria_changed(state), vec![]))
        }
        Event::IndustrySelected(industry) => {
            if &state.criteria.industry == industry {
                return Ok((false, vec![]));
            }
            state.criteria.industry.clone_from(industry);
            Ok((criteria_changed(state), vec![]))
        }
        Event::SortSelected(sort) => {
            if state.criteria.sort == *sort {
                return Ok((false, vec![]));
            }
            state.criteria.sort = *sort;
            Ok((criteria_changed(state), vec![]))
        }
        Event::GoToPage(page) => Ok((state.set_page(*page), vec![])),
        Event::FirstPage => Ok((state.set_page(1), vec![])),
        Event::PreviousPage => Ok((state.set_page(state.page.saturating_sub(1)), vec![])),
        Event::NextPage => Ok((state.set_page(state.page.saturating_add(1)), vec![])),
        Event::LastPage => Ok((state.set_page(state.total_pages()), vec![])),
        Event::WorkerResponse(response) => Ok((apply_response(state, response), vec![])),
    }
}

/// Resets to page 1 and re-runs the query after a criteria change.
fn criteria_changed(state: &mut AppState) -> bool {
    state.page = 1;
    state.recompute_query();

    tracing::debug!(
        search = %state.criteria.search,
        industry = %state.criteria.industry,
        sort = %state.criteria.sort,
        visible = state.filtered.len(),
        "criteria changed"
    );
    true
}

/// Applies a load outcome if it belongs to the current, mounted load.
fn apply_response(state: &mut AppState, response: &WorkerResponse) -> bool {
    let load_id = response.load_id();

    if !state.mounted {
        tracing::warn!(load_id, "view unmounted, discarding load outcome");
        return false;
    }
    if state.in_flight != Some(load_id) {
        tracing::warn!(load_id, current = ?state.in_flight, "discarding superseded load outcome");
        return false;
    }
    state.in_flight = None;

    match response {
        WorkerResponse::CompaniesLoaded { companies, .. } => {
            state.apply_loaded(companies.clone());
        }
        WorkerResponse::LoadFailed { message, .. } => {
            tracing::warn!(load_id, error = %message, "load failed");
            state.apply_failed(message.clone());
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadStatus;
    use crate::domain::Company;
    use crate::worker::WorkerMessage;
    use std::num::NonZeroUsize;

    fn state() -> AppState {
        AppState::new(NonZeroUsize::new(10).unwrap(), 350, 200)
    }

    fn companies(n: i64) -> Vec<Company> {
        (1..=n)
            .map(|i| {
                let industry = if i % 5 == 0 { "Finance" } else { "Tech" };
                Company::new(i, format!("Firm {i:02}"), "City", industry).with_employees(i as u64)
            })
            .collect()
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn posted_load_id(actions: &[Action]) -> u64 {
        match actions {
            [Action::PostToWorker(message @ WorkerMessage::LoadCompanies { .. })] => message.load_id(),
            other => panic!("expected a single load, got {other:?}"),
        }
    }

    fn loaded(load_id: u64, companies: Vec<Company>) -> Event {
        Event::WorkerResponse(WorkerResponse::CompaniesLoaded { load_id, companies })
    }

    fn failed(load_id: u64, message: &str) -> Event {
        Event::WorkerResponse(WorkerResponse::LoadFailed {
            load_id,
            message: message.into(),
        })
    }

    /// Mounted state holding `n` companies on page 1.
    fn ready(n: i64) -> AppState {
        let mut state = state();
        let (_, actions) = send(&mut state, Event::Mount);
        send(&mut state, loaded(posted_load_id(&actions), companies(n)));
        state
    }

    #[test]
    fn mount_starts_initial_load() {
        let mut state = state();
        let (render, actions) = send(&mut state, Event::Mount);

        assert!(render);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::load_companies(1, 350))]
        );
        assert_eq!(state.status, LoadStatus::Loading);
        assert!(state.mounted);
    }

    #[test]
    fn second_mount_is_ignored() {
        let mut state = state();
        send(&mut state, Event::Mount);
        let (render, actions) = send(&mut state, Event::Mount);

        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn success_enters_ready() {
        let state = ready(25);

        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.companies.len(), 25);
        assert_eq!(state.industries, ["Finance", "Tech"]);
        assert_eq!(state.in_flight, None);
    }

    #[test]
    fn failure_enters_failed_with_message() {
        let mut state = state();
        let (_, actions) = send(&mut state, Event::Mount);
        let (render, _) = send(&mut state, failed(posted_load_id(&actions), "Unexpected companies.json format"));

        assert!(render);
        assert_eq!(state.status, LoadStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("Unexpected companies.json format"));
        assert!(state.companies.is_empty());
    }

    #[test]
    fn retry_after_failure_uses_retry_delay() {
        let mut state = state();
        let (_, actions) = send(&mut state, Event::Mount);
        send(&mut state, failed(posted_load_id(&actions), "boom"));

        let (render, actions) = send(&mut state, Event::Retry);
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::load_companies(2, 200))]
        );
        assert_eq!(state.status, LoadStatus::Loading);
        assert_eq!(state.error, None);

        send(&mut state, loaded(2, companies(3)));
        assert_eq!(state.status, LoadStatus::Ready);
    }

    #[test]
    fn retry_supersedes_pending_load() {
        let mut state = state();
        let (_, first) = send(&mut state, Event::Mount);
        let (_, second) = send(&mut state, Event::Retry);
        let first = posted_load_id(&first);
        let second = posted_load_id(&second);

        let (render, _) = send(&mut state, loaded(second, companies(2)));
        assert!(render);

        let (render, _) = send(&mut state, failed(first, "late"));
        assert!(!render);
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.companies.len(), 2);
    }

    #[test]
    fn stale_outcome_arriving_first_is_discarded() {
        let mut state = state();
        let (_, first) = send(&mut state, Event::Mount);
        send(&mut state, Event::Retry);

        let (render, _) = send(&mut state, loaded(posted_load_id(&first), companies(9)));
        assert!(!render);
        assert_eq!(state.status, LoadStatus::Loading);
        assert!(state.companies.is_empty());
    }

    #[test]
    fn outcome_after_unmount_is_discarded() {
        let mut state = state();
        let (_, actions) = send(&mut state, Event::Mount);
        let (_, unmount_actions) = send(&mut state, Event::Unmount);
        assert_eq!(unmount_actions, vec![Action::CancelDebounce]);

        let (render, _) = send(&mut state, loaded(posted_load_id(&actions), companies(4)));
        assert!(!render);
        assert!(state.companies.is_empty());
        assert_eq!(state.status, LoadStatus::Loading);
    }

    #[test]
    fn events_after_unmount_are_ignored() {
        let mut state = ready(25);
        send(&mut state, Event::Unmount);

        for event in [
            Event::Retry,
            Event::SearchChanged("x".into()),
            Event::NextPage,
            Event::SortSelected(SortOption::NameDesc),
        ] {
            let (render, actions) = send(&mut state, event);
            assert!(!render);
            assert!(actions.is_empty());
        }
        assert_eq!(state.page, 1);
    }

    #[test]
    fn remount_starts_a_fresh_load() {
        let mut state = state();
        let (_, first) = send(&mut state, Event::Mount);
        send(&mut state, Event::Unmount);
        let (_, second) = send(&mut state, Event::Mount);

        assert!(posted_load_id(&second) > posted_load_id(&first));
        send(&mut state, loaded(posted_load_id(&first), companies(1)));
        assert!(state.companies.is_empty());
    }

    #[test]
    fn search_keystroke_is_debounced() {
        let mut state = ready(25);
        state.page = 2;

        let (render, actions) = send(&mut state, Event::SearchChanged("Firm 1".into()));
        assert!(render);
        assert_eq!(actions, vec![Action::DebounceSearch("Firm 1".into())]);
        assert_eq!(state.search_input, "Firm 1");
        assert_eq!(state.criteria.search, "");
        assert_eq!(state.page, 2);
        assert_eq!(state.filtered.len(), 25);
    }

    #[test]
    fn settled_search_filters_and_resets_page() {
        let mut state = ready(25);
        state.page = 3;

        let (render, _) = send(&mut state, Event::SearchSettled("firm 1".into()));
        assert!(render);
        assert_eq!(state.page, 1);
        assert_eq!(state.filtered.len(), 10);
    }

    #[test]
    fn industry_and_sort_reset_page() {
        let mut state = ready(25);

        state.page = 2;
        send(&mut state, Event::IndustrySelected("Finance".into()));
        assert_eq!(state.page, 1);
        assert_eq!(state.filtered.len(), 5);

        state.page = 2;
        send(&mut state, Event::SortSelected(SortOption::EmployeesDesc));
        assert_eq!(state.page, 1);
        assert_eq!(state.filtered[0].employees, Some(25));
    }

    #[test]
    fn unchanged_criteria_do_not_reset_page() {
        let mut state = ready(25);
        send(&mut state, Event::IndustrySelected("Tech".into()));
        send(&mut state, Event::NextPage);
        assert_eq!(state.page, 2);

        let (render, _) = send(&mut state, Event::IndustrySelected("Tech".into()));
        assert!(!render);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn navigation_clamps() {
        let mut state = ready(25);

        let (render, _) = send(&mut state, Event::PreviousPage);
        assert!(!render);
        assert_eq!(state.page, 1);

        send(&mut state, Event::LastPage);
        assert_eq!(state.page, 3);

        let (render, _) = send(&mut state, Event::NextPage);
        assert!(!render);
        assert_eq!(state.page, 3);

        send(&mut state, Event::GoToPage(42));
        assert_eq!(state.page, 3);

        send(&mut state, Event::FirstPage);
        assert_eq!(state.page, 1);

        send(&mut state, Event::GoToPage(2));
        assert_eq!(state.current_page().slice.len(), 10);
    }

    #[test]
    fn empty_dataset_is_page_one_of_one() {
        let mut state = ready(0);

        assert_eq!(state.total_pages(), 1);
        assert!(state.industries.is_empty());
        send(&mut state, Event::NextPage);
        assert_eq!(state.page, 1);
        assert!(state.current_page().slice.is_empty());
    }

    #[test]
    fn criteria_survive_reload() {
        let mut state = ready(25);
        send(&mut state, Event::IndustrySelected("Finance".into()));

        let (_, actions) = send(&mut state, Event::Retry);
        send(&mut state, loaded(posted_load_id(&actions), companies(10)));

        assert_eq!(state.filtered.len(), 2);
    }
}
