//! Actions representing side effects to be executed by the directory runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler after a state transition. Actions are the boundary
//! between pure state changes and effectful operations: starting background
//! loads and driving the search debounce timer.
//!
//! # Example
//!
//! ```rust
//! use company_directory::app::Action;
//! use company_directory::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_companies(1, 350)),
//!     Action::DebounceSearch("tech".into()),
//! ];
//! ```

use crate::worker::WorkerMessage;

/// Commands executed by [`Directory`](crate::Directory) after each event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a message to the background load worker.
    PostToWorker(WorkerMessage),

    /// Feeds raw search text into the debouncer, restarting its timer.
    ///
    /// The settled value comes back later as
    /// [`Event::SearchSettled`](crate::app::Event::SearchSettled).
    DebounceSearch(String),

    /// Cancels any pending debounce timer.
    CancelDebounce,
}
