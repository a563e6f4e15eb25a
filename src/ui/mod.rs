//! Render payload for the directory page.
//!
//! Nothing here draws. [`AppState::compute_viewmodel`](crate::AppState::compute_viewmodel)
//! flattens state into a [`DirectoryViewModel`] holding every string and flag a
//! renderer needs, and the renderer (terminal, template, web) only lays it out.
//!
//! ```text
//! AppState → compute_viewmodel → DirectoryViewModel → (any renderer)
//! ```
//!
//! All view model types implement `Serialize`, so the payload can be handed to
//! a template engine or a web frontend as JSON.

pub mod viewmodel;

pub use viewmodel::{
    CompanyCard, DirectoryViewModel, EmptyState, ErrorBanner, PaginationInfo, SelectOption,
};
