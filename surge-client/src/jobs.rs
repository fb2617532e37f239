//! Job lifecycle operations

use std::time::Duration;
use tracing::debug;

use crate::EndpointClient;
use crate::error::{ClientError, Result};
use surge_core::domain::job::{CancelAck, Job, SubmissionRequest};
use surge_core::dto::job::{CancelResponse, RunResponse, StatusResponse};

/// Extra headroom granted to the HTTP request of a synchronous run, so
/// a remote that honors the wait ceiling always answers before the
/// transport gives up.
const SYNC_GRACE: Duration = Duration::from_secs(10);

impl EndpointClient {
    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Submit a job for asynchronous execution
    ///
    /// Sends the payload exactly once and returns the job in its
    /// remote-reported initial state (Queued or InProgress). There is no
    /// implicit retry on transport failure: a resend could create a
    /// duplicate job, so retry policy belongs to the caller.
    ///
    /// # Errors
    /// [`ClientError::InvalidRequest`] if the payload container is
    /// empty; [`ClientError::Transport`]/[`ClientError::Api`] on
    /// communication failure.
    pub async fn run(&self, request: &SubmissionRequest) -> Result<Job> {
        self.check_payload(request)?;

        let url = self.endpoint_url("run");
        debug!(endpoint = self.endpoint_id(), "submitting job");

        let response = self
            .http()
            .post(&url)
            .bearer_auth(&self.config().api_key)
            .timeout(self.config().request_timeout)
            .json(request)
            .send()
            .await?;

        let resp: RunResponse = self.handle_response(response).await?;
        debug!(job_id = %resp.id, status = ?resp.status, "job submitted");

        Ok(Job::from(resp))
    }

    /// Submit a job and wait on the remote side for its result
    ///
    /// The remote holds the request open up to `timeout`. If the job is
    /// still non-terminal when the remote answers, the returned snapshot
    /// is re-tagged TimedOut — a timeout here is a job classification,
    /// never an error, matching how the poller reports giving up.
    ///
    /// Use this for short jobs; it offers no intermediate progress
    /// visibility and no cancellation window.
    pub async fn run_sync(&self, request: &SubmissionRequest, timeout: Duration) -> Result<Job> {
        self.check_payload(request)?;

        let url = self.endpoint_url("runsync");
        debug!(
            endpoint = self.endpoint_id(),
            wait_ms = timeout.as_millis() as u64,
            "submitting synchronous job"
        );

        let response = self
            .http()
            .post(&url)
            .bearer_auth(&self.config().api_key)
            .query(&[("wait", timeout.as_millis() as u64)])
            .timeout(timeout + SYNC_GRACE)
            .json(request)
            .send()
            .await?;

        let resp: StatusResponse = self.handle_response(response).await?;

        Ok(settle_sync(Job::from(resp)))
    }

    /// Query the current state of a job
    ///
    /// Output and error detail are populated per the terminal-state
    /// invariants; see [`surge_core::dto::job::StatusResponse`].
    pub async fn status(&self, job_id: &str) -> Result<Job> {
        let url = self.endpoint_url(&format!("status/{}", job_id));

        let response = self
            .http()
            .get(&url)
            .bearer_auth(&self.config().api_key)
            .timeout(self.config().request_timeout)
            .send()
            .await?;

        let resp: StatusResponse = self.handle_response(response).await?;
        debug!(job_id = %resp.id, status = ?resp.status, "fetched job status");

        Ok(Job::from(resp))
    }

    /// Request early termination of a job
    ///
    /// Single request, no retry. Cancelling a job that already finished
    /// is a no-op the remote acknowledges with the unchanged terminal
    /// state.
    pub async fn cancel(&self, job_id: &str) -> Result<CancelAck> {
        let url = self.endpoint_url(&format!("cancel/{}", job_id));
        debug!(job_id, "requesting job cancellation");

        let response = self
            .http()
            .post(&url)
            .bearer_auth(&self.config().api_key)
            .timeout(self.config().request_timeout)
            .send()
            .await?;

        let resp: CancelResponse = self.handle_response(response).await?;

        Ok(CancelAck::from(resp))
    }

    fn check_payload(&self, request: &SubmissionRequest) -> Result<()> {
        if request.is_empty() {
            return Err(ClientError::InvalidRequest(
                "submission payload is empty".into(),
            ));
        }
        Ok(())
    }
}

/// Classify the outcome of a synchronous wait
///
/// A terminal response passes through untouched; a non-terminal one
/// means the remote's wait ceiling elapsed first, so the snapshot is
/// re-tagged TimedOut — the same classification the poller uses when it
/// gives up, keeping the two waiting paths symmetric for callers.
fn settle_sync(mut job: Job) -> Job {
    if !job.state.is_terminal() {
        debug!(job_id = %job.id, "synchronous wait elapsed before a terminal state");
        job.mark_timed_out();
    }
    job
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use serde_json::json;

    fn test_client() -> EndpointClient {
        EndpointClient::new(Config::new("sk-test", "ep-video-upscale")).unwrap()
    }

    #[tokio::test]
    async fn test_run_rejects_empty_payload() {
        let client = test_client();
        let err = client
            .run(&SubmissionRequest::new(json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_run_sync_rejects_null_payload() {
        let client = test_client();
        let err = client
            .run_sync(&SubmissionRequest::new(json!(null)), Duration::from_secs(60))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[test]
    fn test_settle_sync_retags_non_terminal_as_timed_out() {
        use surge_core::domain::job::{Job, JobState};

        let job = settle_sync(Job {
            id: "abc".to_string(),
            state: JobState::InProgress,
            execution_time: Some(Duration::from_millis(60_000)),
            output: None,
            error_detail: None,
        });
        assert_eq!(job.state, JobState::TimedOut);
        assert!(job.output.is_none());
        assert!(job.error_detail.is_none());
    }

    #[test]
    fn test_settle_sync_passes_terminal_response_through() {
        use surge_core::domain::job::{Job, JobState};

        let job = settle_sync(Job {
            id: "abc".to_string(),
            state: JobState::Completed,
            execution_time: Some(Duration::from_millis(5_000)),
            output: Some(json!({"url": "https://example.com/out.mp4"})),
            error_detail: None,
        });
        assert_eq!(job.state, JobState::Completed);
        assert_eq!(job.execution_time, Some(Duration::from_millis(5_000)));
        assert!(job.output.is_some());
    }

    #[test]
    fn test_operation_urls() {
        let client = test_client();
        assert_eq!(
            client.endpoint_url("run"),
            format!("{}/ep-video-upscale/run", crate::DEFAULT_BASE_URL)
        );
        assert_eq!(
            client.endpoint_url("cancel/abc"),
            format!("{}/ep-video-upscale/cancel/abc", crate::DEFAULT_BASE_URL)
        );
    }
}
