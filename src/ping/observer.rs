use tracing::{debug, warn};

use crate::ping::{PingError, PingResponse};

/// Receives the outcome of every ping.
///
/// Failures always reach the observer; they are never dropped silently.
pub trait PingObserver: Send + Sync {
    fn on_success(&self, response: &PingResponse, call_count: u64);

    fn on_failure(&self, error: &PingError, failure_count: u64);
}

/// Default observer: reports outcomes through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPingObserver;

impl PingObserver for TracingPingObserver {
    fn on_success(&self, response: &PingResponse, call_count: u64) {
        debug!(
            timestamp = response.timestamp,
            call_count, "ping succeeded"
        );
    }

    fn on_failure(&self, error: &PingError, failure_count: u64) {
        warn!(error = %error, failure_count, "ping failed");
    }
}
