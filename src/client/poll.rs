//! Poll-until-terminal: wait for a long-running job to settle.
//!
//! Scans, reports, and exports all run asynchronously on the server. The
//! functions here re-fetch a job at a fixed interval until its status is one
//! of completed, aborted, or failed, then hand back the final snapshot.
//!
//! No timeout is built in. Callers that need one wrap the async variants in
//! [`tokio::time::timeout`].

use std::future::Future;
use std::time::Duration;

use log::debug;

use crate::error::Result;

/// Interval used when the caller does not choose one.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Lifecycle state of a server-side job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    /// Queued or scheduled, not yet running
    Pending,
    /// Running (including transitional states like "aborting")
    Processing,
    /// Finished successfully
    Completed,
    /// Stopped on request
    Aborted,
    /// Stopped by an error
    Failed,
}

impl JobState {
    /// Map a raw server status string onto a job state.
    ///
    /// Matching is case-insensitive. Unknown strings are treated as pending
    /// so that a new server-side state never ends a wait early.
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "completed" | "done" => JobState::Completed,
            "aborted" => JobState::Aborted,
            "failed" => JobState::Failed,
            "processing" | "scanning" | "starting" | "aborting" | "pausing" | "resuming" => {
                JobState::Processing
            }
            _ => JobState::Pending,
        }
    }

    /// Whether the job will never change state again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            JobState::Completed | JobState::Aborted | JobState::Failed
        )
    }
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobState::Pending => "pending",
            JobState::Processing => "processing",
            JobState::Completed => "completed",
            JobState::Aborted => "aborted",
            JobState::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// A fetched view of a pollable job.
pub trait Snapshot {
    /// Current lifecycle state of the job.
    fn job_state(&self) -> JobState;
}

/// Re-fetch `id` every `interval` until it reaches a terminal state.
///
/// The first fetch happens immediately. Sleeps only happen between fetches,
/// so a job that is already terminal costs one call and no sleep. A fetch
/// error ends the wait and is returned unchanged.
pub async fn poll_until_terminal<S, F, Fut>(id: &str, interval: Duration, get: F) -> Result<S>
where
    S: Snapshot,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<S>>,
{
    poll_until_terminal_with(id, interval, get, tokio::time::sleep).await
}

/// [`poll_until_terminal`] with an injectable sleep function.
pub async fn poll_until_terminal_with<S, F, Fut, Z, ZFut>(
    id: &str,
    interval: Duration,
    mut get: F,
    mut sleep: Z,
) -> Result<S>
where
    S: Snapshot,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<S>>,
    Z: FnMut(Duration) -> ZFut,
    ZFut: Future<Output = ()>,
{
    loop {
        let snapshot = get(id.to_string()).await?;
        let state = snapshot.job_state();
        debug!("Job {} is {}", id, state);

        if state.is_terminal() {
            return Ok(snapshot);
        }

        sleep(interval).await;
    }
}

/// Blocking variant of [`poll_until_terminal`].
pub fn poll_until_terminal_blocking<S, F>(id: &str, interval: Duration, get: F) -> Result<S>
where
    S: Snapshot,
    F: FnMut(&str) -> Result<S>,
{
    poll_until_terminal_blocking_with(id, interval, get, std::thread::sleep)
}

/// Blocking variant with an injectable sleep function.
pub fn poll_until_terminal_blocking_with<S, F, Z>(
    id: &str,
    interval: Duration,
    mut get: F,
    mut sleep: Z,
) -> Result<S>
where
    S: Snapshot,
    F: FnMut(&str) -> Result<S>,
    Z: FnMut(Duration),
{
    loop {
        let snapshot = get(id)?;
        let state = snapshot.job_state();
        debug!("Job {} is {}", id, state);

        if state.is_terminal() {
            return Ok(snapshot);
        }

        sleep(interval);
    }
}
