//! Job domain types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client-side snapshot of a remote inference job
///
/// Created at submission and refreshed from status responses. The client
/// never mutates job state locally, with one exception: a watcher that
/// gives up re-tags its last snapshot as [`JobState::TimedOut`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Remote-issued identifier, opaque to the client
    pub id: String,
    pub state: JobState,
    /// Wall time spent executing, reported once work has begun
    pub execution_time: Option<Duration>,
    /// Result payload, present only in the Completed state
    pub output: Option<serde_json::Value>,
    /// Failure description, present only in the Failed state
    pub error_detail: Option<String>,
}

impl Job {
    /// Snapshot for a job the client stopped watching before observing a
    /// terminal state. Carries no output or error by definition.
    pub fn timed_out(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: JobState::TimedOut,
            execution_time: None,
            output: None,
            error_detail: None,
        }
    }

    /// Re-tags this snapshot as timed out, clearing any fields that are
    /// only meaningful in a remote terminal state.
    ///
    /// TimedOut is a client-local classification: the remote job may
    /// still be running, so no partial output or error is retained.
    pub fn mark_timed_out(&mut self) {
        self.state = JobState::TimedOut;
        self.output = None;
        self.error_detail = None;
    }
}

/// Job lifecycle state
///
/// Ordered lifecycle: `Queued → InProgress → {Completed | Failed |
/// Cancelled}`. `TimedOut` never comes from the remote; it records that
/// the client exhausted its patience while the job was non-terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    Queued,
    InProgress,
    Completed,
    Failed,
    Cancelled,
    TimedOut,
}

impl JobState {
    /// True for states the remote reports as final. No further
    /// transitions occur once one of these is observed.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    /// True once a caller can stop waiting: any remote terminal state,
    /// or the client-local TimedOut classification.
    pub fn is_settled(self) -> bool {
        self.is_terminal() || self == Self::TimedOut
    }
}

/// Payload submitted to an endpoint
///
/// The `input` value is opaque pass-through data (media references,
/// numeric parameters, ...); the remote side is the authority on its
/// schema. The client only rejects an empty container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub input: serde_json::Value,
}

impl SubmissionRequest {
    pub fn new(input: serde_json::Value) -> Self {
        Self { input }
    }

    /// True when there is nothing to submit: a null input or an empty
    /// object. Anything else is forwarded untouched.
    pub fn is_empty(&self) -> bool {
        match &self.input {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }
}

/// Remote acknowledgment of a cancel request
///
/// `state` is whatever the remote reports after processing the request:
/// Cancelled for a job that was still running, or the unchanged terminal
/// state for a job that had already finished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelAck {
    pub job_id: String,
    pub state: JobState,
}
