//! Cancellable fetch bound to the demo's mount lifetime.

use std::sync::mpsc::Sender;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::instrument::WithSubscriber;

use crate::github::UsersClient;
use crate::ui::events::AppEvent;

use super::intent::FetchIntent;

/// Owns the spawned fetch. Dropping it aborts the task.
pub struct FetchTask {
    generation: u64,
    handle: JoinHandle<()>,
}

impl FetchTask {
    /// Spawn one fetch on `runtime`. The outcome is delivered as
    /// `AppEvent::Fetch` on `events`. Errors are logged here and reported
    /// as `FetchIntent::Failed`, under the subscriber current at spawn time.
    pub fn spawn(
        runtime: &Handle,
        client: UsersClient,
        generation: u64,
        events: Sender<AppEvent>,
    ) -> Self {
        let handle = runtime.spawn(async move {
            let intent = match client.fetch_users().await {
                Ok(users) => FetchIntent::Loaded { generation, users },
                Err(err) => {
                    tracing::warn!(generation, error = %err, "Users fetch failed");
                    FetchIntent::Failed { generation }
                }
            };
            if events.send(AppEvent::Fetch(intent)).is_err() {
                tracing::trace!(generation, "Fetch result dropped (receiver gone)");
            }
        }
        .with_current_subscriber());

        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Abort the task if it is still running.
    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            tracing::debug!(generation = self.generation, "Cancelling users fetch");
            self.handle.abort();
        }
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
