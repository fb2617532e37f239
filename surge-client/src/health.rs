//! Endpoint health probe

use tracing::debug;

use crate::EndpointClient;
use crate::error::Result;
use surge_core::domain::health::HealthSnapshot;

impl EndpointClient {
    /// Fetch a liveness/capacity snapshot of the endpoint
    ///
    /// Stateless and idempotent; independent of any job. Useful as a
    /// prerequisite check before submitting real work.
    pub async fn health(&self) -> Result<HealthSnapshot> {
        let url = self.endpoint_url("health");

        let response = self
            .http()
            .get(&url)
            .bearer_auth(&self.config().api_key)
            .timeout(self.config().request_timeout)
            .send()
            .await?;

        let snapshot: HealthSnapshot = self.handle_response(response).await?;
        debug!(
            idle = snapshot.workers.idle,
            running = snapshot.workers.running,
            queued = snapshot.jobs.in_queue,
            "fetched endpoint health"
        );

        Ok(snapshot)
    }
}
