//! Domain layer for the company directory.
//!
//! Core types and the pure data pipeline, independent of how data is fetched
//! or rendered.
//!
//! # Organization
//!
//! - [`company`]: the `Company` record
//! - [`criteria`]: search/industry/sort inputs
//! - [`query`]: filter + sort stage
//! - [`pagination`]: page slicing stage
//! - [`error`]: error types and result alias
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//! use company_directory::domain::{paginate, query, Company, QueryCriteria};
//!
//! let all = vec![Company::new(1, "Acme", "Paris", "Retail")];
//! let visible = query(&all, &QueryCriteria::default());
//! let page = paginate(&visible, 1, NonZeroUsize::new(10).unwrap());
//! assert_eq!(page.slice.len(), 1);
//! ```

pub mod company;
pub mod criteria;
pub mod error;
pub mod pagination;
pub mod query;

pub use company::Company;
pub use criteria::{QueryCriteria, SortOption};
pub use error::{DirectoryError, Result};
pub use pagination::{paginate, total_pages, Page};
pub use query::{compare_names, distinct_industries, query};
