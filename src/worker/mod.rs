//! Background worker for asynchronous company loads.
//!
//! The controller never fetches directly. It posts a [`WorkerMessage`] and
//! later receives a [`WorkerResponse`] as an event, so the view stays
//! interactive while a load is pending.
//!
//! # Architecture
//!
//! - `messages`: request/response protocol types
//! - `handler`: worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::{handle_message, LoadWorker};
pub use messages::{WorkerMessage, WorkerResponse};
