//! Background work started alongside the calculator.
//!
//! Tasks spawned here are fire-and-forget: their failures are logged and
//! dropped, and nothing in the calculation waits on them.

use std::future::Future;

use debts_common::warn;
use tokio::task::JoinHandle;
use tracing::debug;

/// Spawns `task` on the runtime and logs, but otherwise ignores, its failure.
pub fn spawn_optional<F>(name: &'static str, task: F) -> JoinHandle<()>
where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        match task.await {
            Ok(()) => debug!(task = name, "startup task finished"),
            Err(err) => warn!(task = name, "startup task failed: {err:#}"),
        }
    })
}

/// Waits for a task started by [`spawn_optional`].
///
/// A panic or cancellation inside the task is logged like any other failure.
pub async fn settle(name: &'static str, handle: JoinHandle<()>) {
    if let Err(err) = handle.await {
        debug!(task = name, %err, "startup task aborted");
    }
}
