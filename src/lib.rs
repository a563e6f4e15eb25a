//! Company directory: load a static dataset of companies, then search, filter,
//! sort and page through it.
//!
//! The crate covers everything between the static `companies.json` resource
//! and the pixels:
//! - Loading the dataset in the background with a loading/failed/retry lifecycle
//! - Case-insensitive name search, debounced against keystroke bursts
//! - Exact industry filter and name/employee-count sorting
//! - Fixed-size pagination with clamped navigation
//! - A render-ready view model for whatever draws the page

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Directory runtime (runtime.rs)                     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Load lifecycle
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - View model  │   │ - Sources     │   │ - Async load  │
//! │               │   │ - Repository  │   │ - Load ids    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Resource paths, debouncer (infrastructure/)      │
//! │  - Query + pagination engines (domain/)             │
//! │  - Error types (domain/error)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber                               │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Load lifecycle state machine with event/action model
//! - [`domain`]: Company record, query engine, pagination engine, errors
//! - [`infrastructure`]: Resource path resolution and the debouncer
//! - [`storage`]: Company sources and the repository
//! - [`worker`]: Background load execution
//! - [`ui`]: View model handed to the rendering layer
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Configuration comes either from a host-provided key/value map
//! ([`Config::from_map`]) or from TOML ([`Config::from_toml_str`],
//! [`Config::load`]):
//!
//! ```toml
//! static_root = "public"
//! data_resource = "/companies.json"
//! page_size = 10
//! search_debounce_ms = 300
//! initial_load_delay_ms = 350
//! retry_load_delay_ms = 200
//! trace_level = "debug"
//! trace_file = "~/.local/share/company-directory/otlp.json"
//! ```
//!
//! # Examples
//!
//! ## Pure pipeline
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use company_directory::{paginate, query, Company, QueryCriteria, SortOption};
//!
//! let all = vec![
//!     Company::new(1, "TechCorp", "Oslo", "Software").with_employees(5),
//!     Company::new(2, "BioTech", "Lyon", "Biotech"),
//!     Company::new(3, "Healthcare", "Rome", "Health").with_employees(20),
//! ];
//!
//! let criteria = QueryCriteria { sort: SortOption::EmployeesDesc, ..Default::default() };
//! let visible = query(&all, &criteria);
//! let page = paginate(&visible, 1, NonZeroUsize::new(2).unwrap());
//!
//! let names: Vec<_> = page.slice.iter().map(|c| c.name.as_str()).collect();
//! assert_eq!(names, ["Healthcare", "TechCorp"]);
//! assert_eq!(page.total_pages, 2);
//! ```
//!
//! ## Mounted view
//!
//! ```rust,no_run
//! use company_directory::{initialize, Config, Directory};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> company_directory::Result<()> {
//! let config = Config::load("directory.toml")?;
//! initialize(&config);
//!
//! let mut directory = Directory::open(&config)?;
//! directory.run_until_idle().await?;
//!
//! directory.set_search("tech")?;
//! directory.select_sort_token("name-asc")?;
//! directory.run_until_idle().await?;
//!
//! for card in directory.view().cards {
//!     println!("{} ({})", card.name, card.subtitle);
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, LoadStatus};
pub use domain::{
    compare_names, distinct_industries, paginate, query, total_pages, Company, DirectoryError, Page,
    QueryCriteria, Result, SortOption,
};
pub use runtime::Directory;
pub use storage::{CompanyRepository, CompanySource, JsonFileSource, StaticSource};
pub use ui::DirectoryViewModel;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Directory configuration.
///
/// Every field has a default, so an empty map or an empty TOML document is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the static resource is served from. `~` expands to `$HOME`.
    /// Default: `"public"`
    pub static_root: String,

    /// URL path of the companies document under `static_root`.
    /// Default: `"/companies.json"`
    pub data_resource: String,

    /// Companies per page. Default: 10
    pub page_size: NonZeroUsize,

    /// Quiet period before search text is applied. Default: 300
    pub search_debounce_ms: u64,

    /// Simulated latency of the load started on mount. Default: 350
    pub initial_load_delay_ms: u64,

    /// Simulated latency of a user-triggered retry. Default: 200
    pub retry_load_delay_ms: u64,

    /// Tracing filter directive, e.g. `"debug"`.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// OTLP JSON trace file. When unset, logs go to stderr.
    pub trace_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            static_root: "public".to_string(),
            data_resource: "/companies.json".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: 300,
            initial_load_delay_ms: 350,
            retry_load_delay_ms: 200,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided key/value map.
    ///
    /// Missing keys, empty values and unparsable numbers fall back to the
    /// defaults; a page size of `0` counts as unparsable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use company_directory::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "25".to_string());
    /// map.insert("search_debounce_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size.get(), 25);
    /// assert_eq!(config.search_debounce_ms, 300);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };
        let millis = |key: &str, fallback: u64| {
            config
                .get(key)
                .and_then(|value| value.trim().parse::<u64>().ok())
                .unwrap_or(fallback)
        };

        Self {
            static_root: text("static_root").unwrap_or(defaults.static_root),
            data_resource: text("data_resource").unwrap_or(defaults.data_resource),
            page_size: config
                .get("page_size")
                .and_then(|value| value.trim().parse::<NonZeroUsize>().ok())
                .unwrap_or(defaults.page_size),
            search_debounce_ms: millis("search_debounce_ms", defaults.search_debounce_ms),
            initial_load_delay_ms: millis("initial_load_delay_ms", defaults.initial_load_delay_ms),
            retry_load_delay_ms: millis("retry_load_delay_ms", defaults.retry_load_delay_ms),
            trace_level: text("trace_level"),
            trace_file: text("trace_file"),
        }
    }

    /// Parses a TOML document. Every key is optional.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] for malformed TOML, wrong value
    /// types or a page size of `0`.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        toml::from_str(document).map_err(|e| DirectoryError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path)
            .map_err(|e| DirectoryError::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_toml_str(&document)
    }

    /// Filesystem location of the companies document.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        infrastructure::resolve_resource(&self.static_root, &self.data_resource)
    }
}

/// Initializes tracing and returns a fresh, unmounted state.
///
/// Safe to call more than once; only the first call installs a subscriber.
///
/// # Example
///
/// ```rust
/// use company_directory::{initialize, Config, LoadStatus};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.status, LoadStatus::Idle);
/// assert_eq!(state.page_size.get(), 10);
/// ```
pub fn initialize(config: &Config) -> AppState {
    observability::init_tracing(config);
    tracing::debug!(data_path = %config.data_path().display(), page_size = config.page_size.get(), "initializing company directory");

    AppState::from_config(config)
}

/// Mounts a directory view over `source`. Shorthand for [`Directory::mount`].
///
/// # Errors
///
/// Returns [`DirectoryError::Worker`] when called outside a tokio runtime.
pub fn mount(config: &Config, source: impl CompanySource + 'static) -> Result<Directory> {
    Directory::mount(config, source)
}
