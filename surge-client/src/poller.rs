//! Status poller
//!
//! Drives an already-submitted job to a settled state by querying its
//! status at a fixed interval. Fixed-interval polling (not backoff)
//! keeps the worst-case latency to detect completion bounded, and the
//! attempt budget puts a deterministic cap on the number of remote
//! calls regardless of interval drift.

use std::time::Duration;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use crate::EndpointClient;
use crate::api::EndpointApi;
use crate::error::Result;
use surge_core::domain::job::Job;

/// Governs one invocation of [`poll_until_terminal`]
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Fixed delay between status queries, slept before every query
    /// including the first
    pub interval: Duration,

    /// Maximum number of status queries before the watcher gives up
    pub max_attempts: u32,

    /// Optional absolute cutoff; once passed, no further query is
    /// issued and the watcher gives up
    pub deadline: Option<Instant>,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
            deadline: None,
        }
    }

    /// Adds an absolute cutoff on top of the attempt budget
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

impl Default for PollPolicy {
    /// 5-second interval, 60 attempts: five minutes of watching
    fn default() -> Self {
        Self::new(Duration::from_secs(5), 60)
    }
}

/// Poll a job's status until it settles
///
/// Queries `api` every `policy.interval` until the job reaches a
/// terminal state (Completed, Failed, or Cancelled) or the attempt
/// budget/deadline is exhausted. Exhaustion returns the last snapshot
/// re-tagged [`JobState::TimedOut`](surge_core::domain::job::JobState) —
/// a client-local classification, since the remote job may well still be
/// running; the watcher has merely stopped looking.
///
/// Queries for this job are issued strictly sequentially; the only
/// suspension points are the interval sleep and the query itself, both
/// cooperative.
///
/// # Errors
/// Any query failure aborts the loop immediately and propagates. A
/// failed query is a communication problem, never evidence that the job
/// itself failed, and it consumes none of the remaining budget for
/// retries because no retry occurs.
pub async fn poll_until_terminal<A>(api: &A, job_id: &str, policy: &PollPolicy) -> Result<Job>
where
    A: EndpointApi + ?Sized,
{
    debug!(
        job_id,
        interval_ms = policy.interval.as_millis() as u64,
        max_attempts = policy.max_attempts,
        "watching job"
    );

    let mut last_snapshot: Option<Job> = None;
    let mut attempts = 0u32;

    while attempts < policy.max_attempts {
        time::sleep(policy.interval).await;

        if let Some(deadline) = policy.deadline {
            if Instant::now() >= deadline {
                break;
            }
        }

        let snapshot = api.status(job_id).await?;
        attempts += 1;

        debug!(job_id, attempt = attempts, status = ?snapshot.state, "polled job status");

        if snapshot.state.is_terminal() {
            info!(job_id, status = ?snapshot.state, attempts, "job settled");
            return Ok(snapshot);
        }

        last_snapshot = Some(snapshot);
    }

    warn!(
        job_id,
        attempts, "giving up on job before a terminal state; the remote job may still be running"
    );

    let mut job = last_snapshot.unwrap_or_else(|| Job::timed_out(job_id));
    job.mark_timed_out();
    Ok(job)
}

impl EndpointClient {
    /// Poll a previously submitted job until it settles
    ///
    /// Convenience wrapper around [`poll_until_terminal`] bound to this
    /// client.
    pub async fn poll_until_terminal(&self, job_id: &str, policy: &PollPolicy) -> Result<Job> {
        poll_until_terminal(self, job_id, policy).await
    }
}
