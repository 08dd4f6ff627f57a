//! Cancellable fixed-interval re-fetch loop.
//!
//! The display surfaces approximate real-time sync with chain state by
//! re-running the full plan read every few seconds. The loop is tied to
//! the lifetime of the owning view through an explicit stop handle, and a
//! failed poll is logged and retried on the next tick, never propagated.

use std::future::Future;
use std::time::Duration;

use log::warn;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::errors::Result;

/// Default polling interval.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Handle for a running poll loop. The loop ends when `stop` is called
/// or the handle is dropped, tying it to the owning view's lifetime.
pub struct PollerHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Signal the loop to stop and wait for it to finish.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(true);
        let _ = self.task.await;
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn a poll loop that invokes `poll` once per `interval` until the
/// handle is stopped. The first invocation happens after one full
/// interval, matching a refetch-interval timer.
pub fn spawn_poller<F, Fut>(interval: Duration, mut poll: F) -> PollerHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<()>> + Send,
{
    let (stop_tx, mut stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // Consume the immediate first tick.
        ticker.tick().await;

        loop {
            tokio::select! {
                changed = stop_rx.changed() => {
                    // A dropped handle counts as a stop signal.
                    if changed.is_err() || *stop_rx.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    if let Err(e) = poll().await {
                        warn!("poll error (will retry): {}", e);
                    }
                }
            }
        }
    });

    PollerHandle { stop_tx, task }
}
