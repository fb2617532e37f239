//! Job DTOs for the endpoint API

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::job::{CancelAck, Job, JobState};

/// Response to a job submission
///
/// The submit path reports only the assigned id and initial state;
/// output and error never appear here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResponse {
    pub id: String,
    pub status: JobState,
    /// Milliseconds, present once the job has started executing
    pub execution_time: Option<u64>,
}

impl From<RunResponse> for Job {
    fn from(resp: RunResponse) -> Self {
        Job {
            id: resp.id,
            state: resp.status,
            execution_time: resp.execution_time.map(Duration::from_millis),
            output: None,
            error_detail: None,
        }
    }
}

/// Response to a status query or a synchronous run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub id: String,
    pub status: JobState,
    pub output: Option<serde_json::Value>,
    pub error: Option<String>,
    /// Milliseconds, present once the job has started executing
    pub execution_time: Option<u64>,
}

impl From<StatusResponse> for Job {
    fn from(resp: StatusResponse) -> Self {
        // Output and error are kept only in the state that defines them,
        // regardless of what the response carried.
        let output = match resp.status {
            JobState::Completed => resp.output,
            _ => None,
        };
        let error_detail = match resp.status {
            JobState::Failed => resp.error,
            _ => None,
        };
        Job {
            id: resp.id,
            state: resp.status,
            execution_time: resp.execution_time.map(Duration::from_millis),
            output,
            error_detail,
        }
    }
}

/// Response to a cancel request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelResponse {
    pub id: String,
    pub status: JobState,
}

impl From<CancelResponse> for CancelAck {
    fn from(resp: CancelResponse) -> Self {
        CancelAck {
            job_id: resp.id,
            state: resp.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_run_response_into_job() {
        let resp: RunResponse =
            serde_json::from_value(json!({"id": "abc", "status": "QUEUED"})).unwrap();
        let job = Job::from(resp);
        assert_eq!(job.id, "abc");
        assert_eq!(job.state, JobState::Queued);
        assert!(job.execution_time.is_none());
        assert!(job.output.is_none());
        assert!(job.error_detail.is_none());
    }

    #[test]
    fn test_status_response_completed_keeps_output_only() {
        let resp: StatusResponse = serde_json::from_value(json!({
            "id": "abc",
            "status": "COMPLETED",
            "output": {"url": "https://example.com/out.mp4"},
            "executionTime": 5250
        }))
        .unwrap();
        let job = Job::from(resp);
        assert_eq!(job.state, JobState::Completed);
        assert_eq!(job.execution_time, Some(Duration::from_millis(5250)));
        assert!(job.output.is_some());
        assert!(job.error_detail.is_none());
    }

    #[test]
    fn test_status_response_failed_keeps_error_only() {
        let resp: StatusResponse = serde_json::from_value(json!({
            "id": "xyz",
            "status": "FAILED",
            "error": "missing field: image_url"
        }))
        .unwrap();
        let job = Job::from(resp);
        assert_eq!(job.state, JobState::Failed);
        assert!(job.output.is_none());
        assert_eq!(job.error_detail.as_deref(), Some("missing field: image_url"));
    }

    #[test]
    fn test_status_response_cancelled_carries_neither() {
        // A misbehaving remote could attach output or error anyway; the
        // conversion drops both outside their defining states.
        let resp: StatusResponse = serde_json::from_value(json!({
            "id": "abc",
            "status": "CANCELLED",
            "output": {"stale": true},
            "error": "stale"
        }))
        .unwrap();
        let job = Job::from(resp);
        assert!(job.output.is_none());
        assert!(job.error_detail.is_none());
    }

    #[test]
    fn test_status_response_non_terminal_carries_neither() {
        let resp: StatusResponse = serde_json::from_value(json!({
            "id": "abc",
            "status": "IN_PROGRESS",
            "output": {"partial": true}
        }))
        .unwrap();
        let job = Job::from(resp);
        assert!(job.output.is_none());
        assert!(job.error_detail.is_none());
    }

    #[test]
    fn test_cancel_response_into_ack() {
        let resp: CancelResponse =
            serde_json::from_value(json!({"id": "abc", "status": "CANCELLED"})).unwrap();
        let ack = CancelAck::from(resp);
        assert_eq!(ack.job_id, "abc");
        assert_eq!(ack.state, JobState::Cancelled);
    }

    #[test]
    fn test_cancel_of_finished_job_acks_with_terminal_state() {
        // Cancelling a job that already finished is a no-op the remote
        // acknowledges with the unchanged terminal state.
        let resp: CancelResponse =
            serde_json::from_value(json!({"id": "abc", "status": "COMPLETED"})).unwrap();
        let ack = CancelAck::from(resp);
        assert_eq!(ack.job_id, "abc");
        assert_eq!(ack.state, JobState::Completed);
    }
}
