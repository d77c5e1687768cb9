//! Location tracker
//!
//! Background scheduler that periodically samples every registered user's
//! location and recomputes their rewards. Runs on its own spawned task from
//! construction until a stop request; each cycle fans out over users on a
//! bounded worker pool that is sized independently of the reward engine's
//! admission limit.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::domain::User;
use crate::error::LocationTrackingError;
use crate::service::GuideService;

/// Configuration for the location tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// How long to sleep between cycles (default: 5 minutes)
    pub polling_interval: Duration,
    /// Maximum users tracked concurrently within one cycle (default: 8)
    pub worker_limit: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            polling_interval: Duration::from_secs(300),
            worker_limit: 8,
        }
    }
}

/// Lifecycle of the tracker task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Running,
    Stopping,
    Stopped,
}

/// Handle to the background tracking task.
pub struct LocationTracker {
    cancel: CancellationToken,
    state_tx: Arc<watch::Sender<TrackerState>>,
    state_rx: watch::Receiver<TrackerState>,
}

impl LocationTracker {
    /// Spawn the tracking loop. The tracker is Running as soon as this
    /// returns.
    pub fn start(service: Arc<GuideService>, config: TrackerConfig) -> Self {
        let cancel = CancellationToken::new();
        let (state_tx, state_rx) = watch::channel(TrackerState::Running);
        let state_tx = Arc::new(state_tx);

        tokio::spawn(run_loop(
            service,
            config,
            cancel.clone(),
            Arc::clone(&state_tx),
        ));

        Self {
            cancel,
            state_tx,
            state_rx,
        }
    }

    pub fn state(&self) -> TrackerState {
        *self.state_rx.borrow()
    }

    /// Request a stop. Interrupts an in-progress sleep; in-flight tracking
    /// work is left to drain. Idempotent and safe to call concurrently with
    /// the run loop.
    pub fn stop(&self) {
        let transitioned = self.state_tx.send_if_modified(|state| {
            if *state == TrackerState::Running {
                *state = TrackerState::Stopping;
                true
            } else {
                false
            }
        });
        if transitioned {
            tracing::info!("location tracker stop requested");
        }
        self.cancel.cancel();
    }

    /// Wait until the run loop has fully terminated.
    pub async fn wait_until_stopped(&self) {
        let mut rx = self.state_rx.clone();
        while *rx.borrow_and_update() != TrackerState::Stopped {
            if rx.changed().await.is_err() {
                break;
            }
        }
    }
}

async fn run_loop(
    service: Arc<GuideService>,
    config: TrackerConfig,
    cancel: CancellationToken,
    state: Arc<watch::Sender<TrackerState>>,
) {
    tracing::info!(
        interval_secs = config.polling_interval.as_secs(),
        worker_limit = config.worker_limit,
        "location tracker started"
    );

    loop {
        if cancel.is_cancelled() {
            break;
        }

        let users = service.store().all();
        tracing::debug!(users = users.len(), "tracker cycle starting");
        let started = Instant::now();

        match run_cycle(&service, users, config.worker_limit).await {
            Ok(tracked) => tracing::debug!(
                tracked,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "tracker cycle finished"
            ),
            // A per-user failure abandons the rest of the cycle; the next
            // cycle starts fresh after the usual sleep.
            Err(error) => tracing::error!(error = %error, "tracker cycle aborted"),
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(config.polling_interval) => {}
        }
    }

    state.send_replace(TrackerState::Stopped);
    tracing::info!("location tracker stopped");
}

/// Track every user once, at most `worker_limit` concurrently. After the
/// first failure no further users are admitted; already-running work drains
/// before the error is returned.
async fn run_cycle(
    service: &Arc<GuideService>,
    users: Vec<Arc<User>>,
    worker_limit: usize,
) -> Result<usize, LocationTrackingError> {
    let worker_limit = worker_limit.max(1);
    let mut tasks: JoinSet<Result<(), LocationTrackingError>> = JoinSet::new();
    let mut pending = users.into_iter();
    let mut failure: Option<LocationTrackingError> = None;
    let mut tracked = 0usize;

    loop {
        while failure.is_none() && tasks.len() < worker_limit {
            let Some(user) = pending.next() else {
                break;
            };
            let service = Arc::clone(service);
            tasks.spawn(async move { service.track_location(&user).await.map(|_| ()) });
        }

        match tasks.join_next().await {
            Some(Ok(Ok(()))) => tracked += 1,
            Some(Ok(Err(error))) => failure = failure.or(Some(error)),
            Some(Err(join_error)) => failure = failure.or(Some(join_error.into())),
            None => break,
        }
    }

    match failure {
        Some(error) => Err(error),
        None => Ok(tracked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_polls_every_five_minutes() {
        let config = TrackerConfig::default();
        assert_eq!(config.polling_interval, Duration::from_secs(300));
        assert_eq!(config.worker_limit, 8);
    }
}
