//! Application layer coordinating state, events, and actions.
//!
//! This module is the load lifecycle controller. It sits between the
//! [`Directory`](crate::Directory) runtime and the domain/storage/worker
//! layers, and contains no I/O of its own.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! View Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Worker Responses / Debounce ──┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Load lifecycle status
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::LoadStatus;
pub use state::AppState;
