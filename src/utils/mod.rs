//! Utility functions module
//! 
//! This module contains the OS signal plumbing.

pub mod signals;

// Re-export main functions
pub use signals::{termination_signals, TERMINATION_SIGNAL};
