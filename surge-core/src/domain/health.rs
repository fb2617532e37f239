//! Endpoint health types

use serde::{Deserialize, Serialize};

/// Point-in-time capacity snapshot of an endpoint
///
/// Deserialized directly from the health response; every count defaults
/// to zero so the client tolerates endpoints that omit fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthSnapshot {
    pub workers: WorkerCounts,
    pub jobs: JobCounts,
}

impl HealthSnapshot {
    /// True when at least one worker can pick up work.
    pub fn has_capacity(&self) -> bool {
        self.workers.idle > 0 || self.workers.ready > 0
    }
}

/// Worker pool counts by lifecycle phase
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerCounts {
    pub idle: u64,
    pub ready: u64,
    pub running: u64,
    pub throttled: u64,
}

/// Queue-level job counts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobCounts {
    pub completed: u64,
    pub failed: u64,
    pub in_progress: u64,
    pub in_queue: u64,
    pub retried: u64,
}
