//! Tracing initialization and subscriber setup.

use super::exporter::{self, SCOPE_NAME};
use crate::infrastructure::expand_tilde;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level directive used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. `"info"`
///
/// # Output
///
/// With `config.trace_file` set, spans are exported through OpenTelemetry as
/// OTLP JSON lines to that file (rotated at 10 MiB, 3 backups). Otherwise
/// events are formatted to stderr.
///
/// Idempotent: if a global subscriber is already installed this does nothing.
///
/// # Example
///
/// ```rust
/// use company_directory::observability::init_tracing;
/// use company_directory::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL))
    });

    let installed = match config.trace_file.as_deref() {
        Some(trace_file) => {
            let path = PathBuf::from(expand_tilde(trace_file));
            let resource = Resource::new(vec![KeyValue::new("service.name", SCOPE_NAME)]);
            let provider = exporter::create_tracer_provider(path, resource);

            tracing_subscriber::registry()
                .with(filter)
                .with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)))
                .try_init()
        }
        None => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(trace_file = ?config.trace_file, "tracing initialized");
    }
}
