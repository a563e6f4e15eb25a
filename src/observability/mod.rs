//! Tracing setup with optional OpenTelemetry file export.
//!
//! All crate code logs through `tracing` macros. This module decides where
//! that output goes.
//!
//! # Architecture
//!
//! ```text
//! tracing ─┬─ (trace_file set) → tracing-opentelemetry → SDK → FileSpanExporter → OTLP JSON lines
//!          └─ (otherwise)      → tracing-subscriber fmt → stderr
//! ```
//!
//! # Features
//!
//! - **File Export**: one OTLP JSON document per exported batch, one per line
//! - **Rotation**: files rotate at 10 MiB with 3 numbered backups
//! - **Resource Metadata**: `service.name = company-directory`
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `exporter`: span exporter and tracer provider
//! - `otlp`: OTLP JSON encoding
//! - `rotating_file`: size-rotated line writer

mod exporter;
mod init;
mod otlp;
mod rotating_file;

pub use init::{init_tracing, DEFAULT_LEVEL};
