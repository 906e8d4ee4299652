//! Standby - a no-op main process that idles until SIGTERM
//! 
//! This library provides the pieces behind the `standby` binary: a one-shot
//! shutdown latch, SIGTERM registration and the waiting main path.

pub mod config;
pub mod error;
pub mod runner;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::StartupError;
pub use runner::run;
pub use state::{Lifecycle, ShutdownLatch};
