use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::ping::config::PING_INTERVAL_MS;

/// Shared polling state.
///
/// Counters are atomics so overlapping in-flight pings may record their
/// outcomes in any order.
#[derive(Debug)]
pub struct PollState {
    repeating: AtomicBool,
    call_count: AtomicU64,
    failure_count: AtomicU64,
    last_timestamp: Mutex<Option<i64>>,
}

impl Default for PollState {
    fn default() -> Self {
        Self {
            repeating: AtomicBool::new(true),
            call_count: AtomicU64::new(0),
            failure_count: AtomicU64::new(0),
            last_timestamp: Mutex::new(None),
        }
    }
}

impl PollState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.repeating.load(Ordering::SeqCst)
    }

    pub fn set_repeating(&self, repeating: bool) {
        self.repeating.store(repeating, Ordering::SeqCst);
    }

    #[must_use]
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn failure_count(&self) -> u64 {
        self.failure_count.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn last_timestamp(&self) -> Option<i64> {
        match self.last_timestamp.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Records a successful ping; returns the new call count.
    pub(crate) fn record_success(&self, timestamp: i64) -> u64 {
        match self.last_timestamp.lock() {
            Ok(mut guard) => *guard = Some(timestamp),
            Err(poisoned) => *poisoned.into_inner() = Some(timestamp),
        }
        self.call_count.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Records a failed ping; returns the new failure count.
    pub(crate) fn record_failure(&self) -> u64 {
        self.failure_count.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[must_use]
    pub fn snapshot(&self) -> PollStateSnapshot {
        PollStateSnapshot {
            repeating: self.is_repeating(),
            call_count: self.call_count(),
            failure_count: self.failure_count(),
            interval_ms: PING_INTERVAL_MS,
            last_timestamp: self.last_timestamp(),
        }
    }
}

/// Point-in-time copy of [`PollState`] for status pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollStateSnapshot {
    pub repeating: bool,
    pub call_count: u64,
    pub failure_count: u64,
    pub interval_ms: u64,
    pub last_timestamp: Option<i64>,
}
