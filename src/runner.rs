//! The waiting main path

use tracing::info;

use crate::{
    error::StartupError,
    state::{Lifecycle, ShutdownLatch},
    tasks::signal_listener_task,
    utils::{signals::signal_name, termination_signals, TERMINATION_SIGNAL},
};

/// Install the SIGTERM handler and suspend until it fires.
///
/// Registration failure is the only error; it is returned unretried.
pub async fn run() -> Result<(), StartupError> {
    run_with(ShutdownLatch::new()).await.map(|_| ())
}

/// Same as [`run`], driving a caller-supplied latch
pub async fn run_with(latch: ShutdownLatch) -> Result<Lifecycle, StartupError> {
    let signals = termination_signals()?;
    let handle = signals.handle();

    tokio::spawn(signal_listener_task(signals, latch.clone()));

    info!("Waiting for {}", signal_name(TERMINATION_SIGNAL));
    let state = latch.wait().await;

    // Stop listening; the listener task ends with the stream.
    handle.close();

    match state.signaled_at() {
        Some(at) => info!("Latch {} at {}, shutting down", state, at.to_rfc3339()),
        None => info!("Latch {}, shutting down", state),
    }
    Ok(state)
}
