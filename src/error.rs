//! Startup error definitions

use std::{io, os::raw::c_int};
use thiserror::Error;

/// Errors that prevent the process from entering its waiting state.
///
/// Once the handler is installed nothing else can fail, so this is the
/// whole taxonomy.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The OS or signal-hook refused to install a handler.
    #[error("failed to register handler for {name} ({signal}): {source}")]
    SignalRegistration {
        signal: c_int,
        name: &'static str,
        #[source]
        source: io::Error,
    },
}
