//! Simulation event log.
//!
//! The engine narrates each dispatch, completion, preemption, and idle
//! transition into an append-only log the caller drains after the run,
//! for display or for asserting on scheduling behavior in tests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One timestamped log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Simulation time the event occurred at.
    pub time: i64,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[t={}] {}", self.time, self.message)
    }
}

/// Ordered, append-only sequence of simulation events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry at the given time.
    pub fn record(&mut self, time: i64, message: impl Into<String>) {
        self.entries.push(LogEntry {
            time,
            message: message.into(),
        });
    }

    /// The entries in emission order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
