//! Worker message types for background load communication.
//!
//! This module defines the request and response protocol between the
//! directory controller and the background load worker. Every load carries a
//! `load_id` so the controller can tell a current outcome from a superseded
//! one.

use crate::domain::Company;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Messages sent from the controller to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch the full company list.
    LoadCompanies {
        /// Identifier echoed back in the response.
        load_id: u64,

        /// Artificial latency applied after the document is read.
        simulated_delay_ms: u64,
    },
}

impl WorkerMessage {
    /// Creates a `LoadCompanies` message.
    #[must_use]
    pub const fn load_companies(load_id: u64, simulated_delay_ms: u64) -> Self {
        Self::LoadCompanies {
            load_id,
            simulated_delay_ms,
        }
    }

    /// Returns the load this message belongs to.
    #[must_use]
    pub const fn load_id(&self) -> u64 {
        match self {
            Self::LoadCompanies { load_id, .. } => *load_id,
        }
    }

    /// Returns the simulated delay as a `Duration`.
    #[must_use]
    pub const fn simulated_delay(&self) -> Duration {
        match self {
            Self::LoadCompanies {
                simulated_delay_ms, ..
            } => Duration::from_millis(*simulated_delay_ms),
        }
    }
}

/// Responses sent from the worker back to the controller.
///
/// Exactly one response is produced per `LoadCompanies` message, either with
/// the companies or with a human-readable failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Companies were fetched and normalised.
    CompaniesLoaded {
        /// Identifier of the originating load.
        load_id: u64,

        /// The companies, in document order.
        companies: Vec<Company>,
    },

    /// The fetch failed.
    LoadFailed {
        /// Identifier of the originating load.
        load_id: u64,

        /// Human-readable error message.
        message: String,
    },
}

impl WorkerResponse {
    /// Returns the load this response belongs to.
    #[must_use]
    pub const fn load_id(&self) -> u64 {
        match self {
            Self::CompaniesLoaded { load_id, .. } | Self::LoadFailed { load_id, .. } => *load_id,
        }
    }
}
