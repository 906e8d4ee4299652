//! Process lifecycle states

use std::fmt;

use chrono::{DateTime, Utc};

/// Where the process is in its lifetime.
///
/// `Waiting` is the initial state; `Signaled` is terminal and leads
/// straight to process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Waiting,
    /// SIGTERM has been observed at `at`.
    Signaled { at: DateTime<Utc> },
}

impl Lifecycle {
    /// Check whether the termination signal has been observed
    pub fn is_signaled(&self) -> bool {
        matches!(self, Lifecycle::Signaled { .. })
    }

    /// Time the termination signal was observed, if it was
    pub fn signaled_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Lifecycle::Waiting => None,
            Lifecycle::Signaled { at } => Some(*at),
        }
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifecycle::Waiting => f.write_str("waiting"),
            Lifecycle::Signaled { .. } => f.write_str("signaled"),
        }
    }
}
