//! Background load worker.
//!
//! [`LoadWorker`] runs repository fetches as tasks on the tokio runtime so the
//! controller never waits on I/O. Each message produces exactly one
//! [`WorkerResponse`], posted back over an unbounded channel.

use crate::storage::CompanyRepository;
use crate::worker::{WorkerMessage, WorkerResponse};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::Instrument;

/// Executes [`WorkerMessage`]s in the background.
#[derive(Debug, Clone)]
pub struct LoadWorker {
    repository: CompanyRepository,
    responses: mpsc::UnboundedSender<WorkerResponse>,
    runtime: Handle,
}

impl LoadWorker {
    /// Creates a worker posting responses to `responses`.
    ///
    /// Tasks are spawned on `runtime`.
    pub fn new(
        repository: CompanyRepository,
        responses: mpsc::UnboundedSender<WorkerResponse>,
        runtime: Handle,
    ) -> Self {
        Self {
            repository,
            responses,
            runtime,
        }
    }

    /// Spawns a task that handles `message` and posts the response.
    ///
    /// If the receiving side is gone by the time the response is ready, the
    /// response is dropped.
    pub fn post(&self, message: WorkerMessage) {
        let repository = self.repository.clone();
        let responses = self.responses.clone();
        let span = tracing::debug_span!("worker_handle_message", load_id = message.load_id());

        tracing::debug!(message = ?message, "posting message to worker");

        self.runtime.spawn(
            async move {
                let response = handle_message(&repository, message).await;
                if responses.send(response).is_err() {
                    tracing::debug!("controller gone, dropping worker response");
                }
            }
            .instrument(span),
        );
    }
}

/// Processes a worker message and returns the matching response.
pub async fn handle_message(repository: &CompanyRepository, message: WorkerMessage) -> WorkerResponse {
    let load_id = message.load_id();
    let delay = message.simulated_delay();

    match message {
        WorkerMessage::LoadCompanies { .. } => match repository.fetch_all(delay).await {
            Ok(companies) => {
                tracing::debug!(load_id, count = companies.len(), "load finished");
                WorkerResponse::CompaniesLoaded { load_id, companies }
            }
            Err(e) => {
                tracing::debug!(load_id, error = %e, "load failed");
                WorkerResponse::LoadFailed {
                    load_id,
                    message: e.to_string(),
                }
            }
        },
    }
}
