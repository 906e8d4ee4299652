//! Termination signal registration

use std::{io, os::raw::c_int};

use signal_hook::consts::{FORBIDDEN, SIGTERM, SIGUSR1};
use signal_hook_tokio::Signals;
use tracing::debug;

use crate::error::StartupError;

/// The only signal this process reacts to
pub const TERMINATION_SIGNAL: c_int = SIGTERM;

/// Size of signal-hook's per-signal table; larger numbers panic inside it
const SIGNAL_TABLE_LEN: c_int = 128;

/// Register a handler for SIGTERM and return its async stream
pub fn termination_signals() -> Result<Signals, StartupError> {
    register(TERMINATION_SIGNAL)
}

/// Register a handler for a single signal.
///
/// Every refusal surfaces as [`StartupError::SignalRegistration`]: numbers
/// signal-hook cannot hold (negative, out of table range, SIGKILL, SIGSTOP,
/// the fault signals) with an `InvalidInput` source, and numbers the OS
/// rejects with the `sigaction` error.
pub fn register(signal: c_int) -> Result<Signals, StartupError> {
    let registration_error = |source| StartupError::SignalRegistration {
        signal,
        name: signal_name(signal),
        source,
    };

    if !(0..SIGNAL_TABLE_LEN).contains(&signal) || FORBIDDEN.contains(&signal) {
        return Err(registration_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "signal cannot be handled",
        )));
    }

    let signals = Signals::new([signal]).map_err(registration_error)?;

    debug!("Registered handler for {}", signal_name(signal));
    Ok(signals)
}

/// Human-readable name for log lines
pub fn signal_name(signal: c_int) -> &'static str {
    match signal {
        SIGTERM => "SIGTERM",
        SIGUSR1 => "SIGUSR1",
        _ => "unknown signal",
    }
}
