//! Background tasks module
//! 
//! This module contains the task that runs alongside the waiting main path.

pub mod signal_listener;

// Re-export main functions
pub use signal_listener::signal_listener_task;
