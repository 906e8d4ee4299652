//! State management module
//! 
//! This module contains the lifecycle state and the latch that guards it.

pub mod lifecycle;
pub mod latch;

// Re-export main types
pub use lifecycle::Lifecycle;
pub use latch::ShutdownLatch;
