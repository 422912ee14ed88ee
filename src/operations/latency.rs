//! Simulated backend latency.
//!
//! There is no real backend behind the task list. Adding and removing a
//! task still go through a [`Latency`] so the UI behaves as if a round trip
//! was in flight, and tests can swap in [`NoLatency`].

use super::OperationKind;
use crate::config::OperationsConfig;
use crate::constants::{DEFAULT_ADD_DELAY_MS, DEFAULT_REMOVE_DELAY_MS};
use async_trait::async_trait;
use std::time::Duration;

/// Source of the delay an operation waits for before it commits.
#[async_trait]
pub trait Latency: Send + Sync {
    /// Resolve once an operation of `kind` would have completed.
    async fn wait(&self, kind: OperationKind);
}

/// Fixed per-kind delays driven by the tokio timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    add: Duration,
    remove: Duration,
}

impl SimulatedLatency {
    pub fn new(add: Duration, remove: Duration) -> Self {
        Self { add, remove }
    }

    pub fn from_config(config: &OperationsConfig) -> Self {
        Self::new(
            Duration::from_millis(config.add_delay_ms),
            Duration::from_millis(config.remove_delay_ms),
        )
    }

    pub fn delay_for(&self, kind: OperationKind) -> Duration {
        match kind {
            OperationKind::Add => self.add,
            OperationKind::Remove => self.remove,
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_ADD_DELAY_MS),
            Duration::from_millis(DEFAULT_REMOVE_DELAY_MS),
        )
    }
}

#[async_trait]
impl Latency for SimulatedLatency {
    async fn wait(&self, kind: OperationKind) {
        tokio::time::sleep(self.delay_for(kind)).await;
    }
}

/// Resolves on the next scheduler turn
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait]
impl Latency for NoLatency {
    async fn wait(&self, _kind: OperationKind) {
        tokio::task::yield_now().await;
    }
}
