//! Liveness ping: a fixed-interval `GET` against the backend with a running
//! count of successful responses.

mod config;
mod error;
mod observer;
mod state;
mod transport;

pub use config::{PING_INTERVAL_MS, PingConfig};
pub use error::{PingError, PingResult};
pub use observer::{PingObserver, TracingPingObserver};
pub use state::{PollState, PollStateSnapshot};
pub use transport::{HttpPingTransport, PingResponse, PingTransport};

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, trace};

use crate::schedule::{ScheduleError, TimerHandle, spawn_repeating};

/// What one scheduled tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// `repeating` was off; no request was issued.
    Suspended,
    Succeeded { call_count: u64 },
    Failed { failure_count: u64 },
}

/// Periodic liveness checker.
///
/// Cloning is cheap; clones share the same [`PollState`], transport and
/// observer.
pub struct PingTracker<T: PingTransport> {
    transport: Arc<T>,
    state: Arc<PollState>,
    observer: Arc<dyn PingObserver>,
}

impl<T: PingTransport> Clone for PingTracker<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            state: Arc::clone(&self.state),
            observer: Arc::clone(&self.observer),
        }
    }
}

impl PingTracker<HttpPingTransport> {
    /// Tracker pinging `config.endpoint` over HTTP, logging through `tracing`.
    pub fn http(config: &PingConfig) -> PingResult<Self> {
        Ok(Self::new(
            HttpPingTransport::new(config)?,
            Arc::new(TracingPingObserver),
        ))
    }
}

impl<T: PingTransport> PingTracker<T> {
    pub fn new(transport: T, observer: Arc<dyn PingObserver>) -> Self {
        Self {
            transport: Arc::new(transport),
            state: Arc::new(PollState::new()),
            observer,
        }
    }

    /// Always [`PING_INTERVAL_MS`], whatever the state.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        PING_INTERVAL_MS
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(PING_INTERVAL_MS)
    }

    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.state.is_repeating()
    }

    /// Suspends or resumes scheduled pings. Counters are kept either way.
    pub fn set_repeating(&self, repeating: bool) {
        debug!(repeating, "ping repeating flag changed");
        self.state.set_repeating(repeating);
    }

    #[must_use]
    pub fn call_count(&self) -> u64 {
        self.state.call_count()
    }

    #[must_use]
    pub fn failure_count(&self) -> u64 {
        self.state.failure_count()
    }

    #[must_use]
    pub fn state(&self) -> Arc<PollState> {
        Arc::clone(&self.state)
    }

    #[must_use]
    pub fn snapshot(&self) -> PollStateSnapshot {
        self.state.snapshot()
    }

    /// Success path: the only place `call_count` grows.
    pub fn on_success(&self, response: &PingResponse) -> u64 {
        let call_count = self.state.record_success(response.timestamp);
        self.observer.on_success(response, call_count);
        call_count
    }

    /// Failure path: counted separately and reported to the observer.
    pub fn on_failure(&self, error: &PingError) -> u64 {
        let failure_count = self.state.record_failure();
        self.observer.on_failure(error, failure_count);
        failure_count
    }

    /// Runs one guarded poll: skipped when `repeating` is off.
    pub async fn tick(&self) -> TickOutcome {
        if !self.is_repeating() {
            trace!("ping suspended, skipping tick");
            return TickOutcome::Suspended;
        }

        match self.transport.ping().await {
            Ok(response) => TickOutcome::Succeeded {
                call_count: self.on_success(&response),
            },
            Err(error) => TickOutcome::Failed {
                failure_count: self.on_failure(&error),
            },
        }
    }
}

impl<T: PingTransport + 'static> PingTracker<T> {
    /// Starts pinging every [`PING_INTERVAL_MS`].
    ///
    /// Each tick runs in its own task, so a slow request never delays the
    /// next one. Dropping the returned handle stops the schedule and aborts
    /// requests still in flight; their outcomes are never recorded.
    pub fn start(&self) -> Result<TimerHandle, ScheduleError> {
        let tracker = self.clone();
        let mut in_flight = JoinSet::new();
        spawn_repeating("ping", self.interval(), move || {
            while in_flight.try_join_next().is_some() {}
            if !tracker.is_repeating() {
                trace!("ping suspended, no request issued");
                return;
            }
            let tracker = tracker.clone();
            in_flight.spawn(async move {
                tracker.tick().await;
            });
            trace!(in_flight = in_flight.len(), "ping request spawned");
        })
    }
}
