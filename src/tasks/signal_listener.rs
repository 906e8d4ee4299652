//! Signal listener background task

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::{debug, info};

use crate::{state::ShutdownLatch, utils::signals::signal_name};

/// Background task that turns delivered signals into a latch trigger.
///
/// Does nothing else: no I/O, no locks. Returns once the signal stream is
/// closed.
pub async fn signal_listener_task(mut signals: Signals, latch: ShutdownLatch) {
    while let Some(signal) = signals.next().await {
        if latch.trigger() {
            info!("Received {}", signal_name(signal));
        } else {
            debug!("Received {} again, already shutting down", signal_name(signal));
        }
    }
    debug!("Signal stream closed");
}
