//! Cancelable repeating timers on the tokio runtime.
//!
//! Both the ping tracker and the resize polling fallback fire on fixed
//! periods without backpressure: a slow callback never shifts later ticks
//! off the schedule. Dropping the returned handle cancels the timer.

use std::time::Duration;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("repeating timer requires a running tokio runtime")]
    NoRuntime,

    #[error("timer period must be > 0")]
    ZeroPeriod,
}

/// Owner of a spawned repeating timer.
///
/// The timer stops on [`TimerHandle::cancel`] or when the handle is dropped.
#[derive(Debug)]
pub struct TimerHandle {
    name: &'static str,
    task: JoinHandle<()>,
}

impl TimerHandle {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn cancel(&self) {
        if !self.task.is_finished() {
            debug!(timer = self.name, "cancelling repeating timer");
        }
        self.task.abort();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawns `callback` every `period`, first firing one period from now.
pub fn spawn_repeating<F>(
    name: &'static str,
    period: Duration,
    mut callback: F,
) -> Result<TimerHandle, ScheduleError>
where
    F: FnMut() + Send + 'static,
{
    if period.is_zero() {
        return Err(ScheduleError::ZeroPeriod);
    }
    let runtime = Handle::try_current().map_err(|_| ScheduleError::NoRuntime)?;

    let task = runtime.spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            callback();
        }
    });
    debug!(timer = name, period_ms = period.as_millis() as u64, "repeating timer started");

    Ok(TimerHandle { name, task })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn timer_fires_once_per_period() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let _handle = spawn_repeating("test", Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .expect("spawn");

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_millis(260)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_handle_stops_timer() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let handle = spawn_repeating("test", Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .expect("spawn");

        tokio::time::sleep(Duration::from_millis(150)).await;
        drop(handle);
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn spawning_outside_runtime_is_an_error() {
        let result = spawn_repeating("test", Duration::from_millis(100), || {});
        assert!(matches!(result, Err(ScheduleError::NoRuntime)));
    }

    #[tokio::test]
    async fn zero_period_is_rejected() {
        let result = spawn_repeating("test", Duration::ZERO, || {});
        assert!(matches!(result, Err(ScheduleError::ZeroPeriod)));
    }
}
