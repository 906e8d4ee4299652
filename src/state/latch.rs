//! One-shot shutdown latch

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::debug;

use super::Lifecycle;

/// Monotonic "termination requested" flag.
///
/// The signal path calls [`trigger`](Self::trigger); the main path parks on
/// [`wait`](Self::wait). Clones share the same flag.
#[derive(Debug, Clone)]
pub struct ShutdownLatch {
    tx: Arc<watch::Sender<Lifecycle>>,
}

impl ShutdownLatch {
    /// Create a new latch in the `Waiting` state
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Lifecycle::Waiting);
        Self { tx: Arc::new(tx) }
    }

    /// Flip the latch to `Signaled`.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn trigger(&self) -> bool {
        let flipped = self.tx.send_if_modified(|state| {
            if state.is_signaled() {
                return false;
            }
            *state = Lifecycle::Signaled { at: Utc::now() };
            true
        });

        if !flipped {
            debug!("Latch already signaled, ignoring trigger");
        }
        flipped
    }

    /// Current lifecycle state
    pub fn state(&self) -> Lifecycle {
        *self.tx.borrow()
    }

    /// Check whether the latch has been triggered
    pub fn is_signaled(&self) -> bool {
        self.state().is_signaled()
    }

    /// Time of the first trigger
    pub fn signaled_at(&self) -> Option<DateTime<Utc>> {
        self.state().signaled_at()
    }

    /// Suspend until the latch is triggered; returns at once if it already was
    pub async fn wait(&self) -> Lifecycle {
        let mut rx = self.tx.subscribe();
        let woken = rx.wait_for(Lifecycle::is_signaled).await.map(|state| *state);
        woken.unwrap_or_else(|_| self.state())
    }
}

impl Default for ShutdownLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[test]
    fn starts_waiting() {
        let latch = ShutdownLatch::new();
        assert_eq!(latch.state(), Lifecycle::Waiting);
        assert!(!latch.is_signaled());
        assert_eq!(latch.signaled_at(), None);
    }

    #[test]
    fn trigger_is_one_shot() {
        let latch = ShutdownLatch::new();
        assert!(latch.trigger());
        let first = latch.state();
        assert!(first.is_signaled());

        assert!(!latch.trigger());
        assert_eq!(latch.state(), first, "second trigger must not touch the timestamp");
    }

    #[test]
    fn clones_share_state() {
        let latch = ShutdownLatch::new();
        let other = latch.clone();
        other.trigger();
        assert!(latch.is_signaled());
    }

    #[tokio::test]
    async fn wait_stays_pending_until_triggered() {
        let latch = ShutdownLatch::new();
        let pending = timeout(Duration::from_millis(50), latch.wait()).await;
        assert!(pending.is_err());
        assert!(!latch.is_signaled());
    }

    #[tokio::test]
    async fn wait_wakes_on_trigger_from_another_task() {
        let latch = ShutdownLatch::new();
        let trigger = latch.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.trigger();
        });

        let state = timeout(Duration::from_secs(5), latch.wait())
            .await
            .expect("waiter was not woken");
        assert!(state.is_signaled());
        assert_eq!(state, latch.state());
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_already_signaled() {
        let latch = ShutdownLatch::new();
        latch.trigger();
        let state = timeout(Duration::from_millis(50), latch.wait())
            .await
            .expect("already-signaled latch should not block");
        assert_eq!(state.signaled_at(), latch.signaled_at());
        assert!(latch.signaled_at().is_some());
    }

    #[tokio::test]
    async fn multiple_waiters_all_wake() {
        let latch = ShutdownLatch::new();
        let waiters: Vec<_> = (0..3)
            .map(|_| {
                let latch = latch.clone();
                tokio::spawn(async move { latch.wait().await })
            })
            .collect();

        tokio::task::yield_now().await;
        latch.trigger();

        for waiter in waiters {
            let state = timeout(Duration::from_secs(5), waiter)
                .await
                .expect("waiter timed out")
                .expect("waiter panicked");
            assert!(state.is_signaled());
        }
    }
}
