//! Load lifecycle state.
//!
//! The directory is always in exactly one [`LoadStatus`]:
//!
//! ```text
//! Idle ──mount──▶ Loading ──ok──▶ Ready
//!                   ▲   └──err──▶ Failed
//!                   └────retry─────┘
//! ```
//!
//! `Ready` is terminal until a new load is triggered; nothing revalidates
//! automatically.
//!
//! # Example
//!
//! ```rust
//! use company_directory::app::LoadStatus;
//!
//! let status = LoadStatus::default();
//! assert_eq!(status, LoadStatus::Idle);
//! assert!(!status.is_loading());
//! ```

use serde::Serialize;

/// Current phase of the company load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// A load is in flight.
    Loading,

    /// The company set is loaded.
    Ready,

    /// The most recent load failed; the error message is kept on the state.
    Failed,
}

impl LoadStatus {
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }

    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}
