//! Mounted directory runtime.
//!
//! A [`Directory`] is one mounted view. It owns the [`AppState`], executes the
//! [`Action`]s the event handler returns, and pumps asynchronous outcomes
//! (load results and debounce ticks) back in as [`Event`]s.
//!
//! ```text
//!  view callbacks ──▶ dispatch(Event) ──▶ handle_event ──▶ Actions
//!                          ▲                                  │
//!                          │        ┌─ PostToWorker ──▶ LoadWorker ──┐
//!                          │        └─ DebounceSearch ─▶ Debouncer ──┤
//!                          └──────── process_next ◀──── channels ◀───┘
//! ```
//!
//! Dropping a `Directory` aborts its debounce timer and closes its channels;
//! background loads still running finish and their outcome is dropped.

use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::error::{DirectoryError, Result};
use crate::domain::SortOption;
use crate::infrastructure::Debouncer;
use crate::storage::{CompanyRepository, CompanySource, JsonFileSource};
use crate::ui::viewmodel::DirectoryViewModel;
use crate::worker::{LoadWorker, WorkerResponse};
use crate::Config;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// One mounted company directory view.
///
/// # Example
///
/// ```rust
/// use company_directory::{Config, Directory};
/// use company_directory::storage::StaticSource;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> company_directory::Result<()> {
/// let config = Config {
///     initial_load_delay_ms: 0,
///     ..Config::default()
/// };
/// let source = StaticSource::new(r#"{"companies": [{"id": 1, "name": "Acme", "industry": "Retail"}]}"#);
///
/// let mut directory = Directory::mount(&config, source)?;
/// assert!(directory.view().loading.is_some());
///
/// directory.run_until_idle().await?;
/// let view = directory.view();
/// assert_eq!(view.cards[0].name, "Acme");
/// assert_eq!(view.industry_options.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Directory {
    state: AppState,
    worker: LoadWorker,
    search: Debouncer<String>,
    responses: mpsc::UnboundedReceiver<WorkerResponse>,
    ticks: mpsc::UnboundedReceiver<u64>,
}

impl Directory {
    /// Mounts a view over `source` and starts the initial load.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Worker`] when called outside a tokio runtime.
    pub fn mount(config: &Config, source: impl CompanySource + 'static) -> Result<Self> {
        Self::mount_with(config, CompanyRepository::new(source))
    }

    /// Mounts a view reading `config.data_path()` from disk.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Worker`] when called outside a tokio runtime.
    /// A missing file is not an error here; it surfaces as a failed load.
    pub fn open(config: &Config) -> Result<Self> {
        Self::mount(config, JsonFileSource::new(config.data_path()))
    }

    /// Mounts a view over an existing repository.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Worker`] when called outside a tokio runtime.
    pub fn mount_with(config: &Config, repository: CompanyRepository) -> Result<Self> {
        let _span = tracing::debug_span!("directory_mount", repository = ?repository).entered();

        let runtime = Handle::try_current()
            .map_err(|e| DirectoryError::Worker(format!("mounting requires a tokio runtime: {e}")))?;

        let (response_tx, responses) = mpsc::unbounded_channel();
        let worker = LoadWorker::new(repository, response_tx, runtime.clone());
        let (search, ticks) = Debouncer::with_handle(
            String::new(),
            Duration::from_millis(config.search_debounce_ms),
            runtime,
        );

        let mut directory = Self {
            state: AppState::from_config(config),
            worker,
            search,
            responses,
            ticks,
        };
        directory.dispatch(Event::Mount)?;
        Ok(directory)
    }

    /// Feeds one event through the handler and executes the resulting
    /// actions. Returns whether the view changed.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let (changed, actions) = handle_event(&mut self.state, &event)?;
        for action in actions {
            self.execute(action);
        }
        Ok(changed)
    }

    fn execute(&mut self, action: Action) {
        tracing::trace!(action = ?action, "executing action");
        match action {
            Action::PostToWorker(message) => self.worker.post(message),
            Action::DebounceSearch(text) => self.search.observe(text),
            Action::CancelDebounce => self.search.cancel(),
        }
    }

    /// Whether a load or a debounce timer is outstanding.
    #[must_use]
    pub const fn has_pending_work(&self) -> bool {
        self.state.in_flight.is_some() || self.search.is_pending()
    }

    /// Waits for the next asynchronous outcome and applies it.
    ///
    /// Returns `Ok(None)` immediately when nothing is pending, otherwise
    /// `Ok(Some(changed))`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub async fn process_next(&mut self) -> Result<Option<bool>> {
        if !self.has_pending_work() {
            return Ok(None);
        }

        let event = tokio::select! {
            Some(response) = self.responses.recv() => Event::WorkerResponse(response),
            Some(tick) = self.ticks.recv() => match self.search.settle(tick) {
                Some(text) => Event::SearchSettled(text.clone()),
                None => return Ok(Some(false)),
            },
            else => return Ok(None),
        };

        self.dispatch(event).map(Some)
    }

    /// Processes outcomes until nothing is pending. Returns how many of them
    /// changed the view.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub async fn run_until_idle(&mut self) -> Result<usize> {
        let mut changes = 0;
        while let Some(changed) = self.process_next().await? {
            changes += usize::from(changed);
        }
        Ok(changes)
    }

    /// Render-ready snapshot of the current state.
    #[must_use]
    pub fn view(&self) -> DirectoryViewModel {
        self.state.compute_viewmodel()
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Raw search input (one keystroke). The query re-runs once the text has
    /// been stable for the debounce delay.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn set_search(&mut self, text: impl Into<String>) -> Result<bool> {
        self.dispatch(Event::SearchChanged(text.into()))
    }

    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn select_industry(&mut self, industry: impl Into<String>) -> Result<bool> {
        self.dispatch(Event::IndustrySelected(industry.into()))
    }

    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn select_sort(&mut self, sort: SortOption) -> Result<bool> {
        self.dispatch(Event::SortSelected(sort))
    }

    /// Selects a sort option by its wire token, e.g. `"name-desc"`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::InvalidSort`] for an unknown token.
    pub fn select_sort_token(&mut self, token: &str) -> Result<bool> {
        self.select_sort(token.parse()?)
    }

    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn go_to_page(&mut self, page: usize) -> Result<bool> {
        self.dispatch(Event::GoToPage(page))
    }

    /// Starts a new load with the retry delay.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn retry(&mut self) -> Result<bool> {
        self.dispatch(Event::Retry)
    }

    /// Tears the view down. Outstanding outcomes will be discarded.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn unmount(&mut self) -> Result<()> {
        self.dispatch(Event::Unmount).map(|_| ())
    }
}
