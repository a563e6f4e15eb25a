//! Infrastructure layer for filesystem and timer interactions.
//!
//! - `paths`: locating the static companies resource under a web root
//! - `debounce`: the [`Debouncer`] used to throttle search input

pub mod debounce;
pub mod paths;

pub use debounce::Debouncer;
pub use paths::{expand_tilde, resolve_resource};
