//! Endpoint API trait
//!
//! Abstracts the five endpoint operations behind a trait so that code
//! driving a job lifecycle (notably the poller) can run against an
//! in-memory fake instead of a live endpoint.

use async_trait::async_trait;
use std::time::Duration;

use crate::EndpointClient;
use crate::error::Result;
use surge_core::domain::health::HealthSnapshot;
use surge_core::domain::job::{CancelAck, Job, SubmissionRequest};

/// Operations of one remote execution endpoint
#[async_trait]
pub trait EndpointApi: Send + Sync {
    /// Submits a job for asynchronous execution
    async fn run(&self, request: &SubmissionRequest) -> Result<Job>;

    /// Submits a job and waits remote-side up to `timeout` for a result
    async fn run_sync(&self, request: &SubmissionRequest, timeout: Duration) -> Result<Job>;

    /// Queries the current state of a job
    async fn status(&self, job_id: &str) -> Result<Job>;

    /// Requests early termination of a job
    async fn cancel(&self, job_id: &str) -> Result<CancelAck>;

    /// Fetches a liveness/capacity snapshot of the endpoint
    async fn health(&self) -> Result<HealthSnapshot>;
}

#[async_trait]
impl EndpointApi for EndpointClient {
    async fn run(&self, request: &SubmissionRequest) -> Result<Job> {
        EndpointClient::run(self, request).await
    }

    async fn run_sync(&self, request: &SubmissionRequest, timeout: Duration) -> Result<Job> {
        EndpointClient::run_sync(self, request, timeout).await
    }

    async fn status(&self, job_id: &str) -> Result<Job> {
        EndpointClient::status(self, job_id).await
    }

    async fn cancel(&self, job_id: &str) -> Result<CancelAck> {
        EndpointClient::cancel(self, job_id).await
    }

    async fn health(&self) -> Result<HealthSnapshot> {
        EndpointClient::health(self).await
    }
}
