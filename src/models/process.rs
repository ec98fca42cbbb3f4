//! Process model.
//!
//! A process is the unit of work submitted to the simulator: an identity
//! plus the three scheduling inputs (arrival time, burst time, priority)
//! and the per-process metrics each discipline computes.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//! The consumer defines what one tick means.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Holds the immutable scheduling inputs and the metrics populated during
/// a simulation run. `priority` follows the usual convention: lower value
/// = higher scheduling precedence. Only the two priority disciplines read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Instant the process becomes eligible to run (ticks, ≥ 0).
    pub arrival_time: i64,
    /// Total CPU time required (ticks, ≥ 1). Immutable once simulation starts.
    pub burst_time: i64,
    /// Scheduling precedence (lower = more urgent, ≥ 0).
    pub priority: i32,
    /// CPU time still owed. Initialized to `burst_time`, decremented as the
    /// process executes.
    pub remaining_time: i64,
    /// Instant the process finished. `None` until it completes.
    pub completion_time: Option<i64>,
    /// Completion − arrival. `None` until the process completes.
    pub turnaround_time: Option<i64>,
    /// Turnaround − burst: total time spent eligible but not running.
    pub waiting_time: Option<i64>,
    /// First dispatch − arrival. Recorded the first time the process ever
    /// runs; re-dispatches under preemptive disciplines leave it untouched.
    pub response_time: Option<i64>,
}

impl Process {
    /// Creates a new process with priority 0.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
            response_time: None,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Restores the working fields for a fresh run: `remaining_time` back to
    /// `burst_time`, all computed metrics cleared.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.completion_time = None;
        self.turnaround_time = None;
        self.waiting_time = None;
        self.response_time = None;
    }

    /// Whether the process has finished executing.
    pub fn is_complete(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Records completion at `time` and derives turnaround and waiting time.
    pub fn complete_at(&mut self, time: i64) {
        self.completion_time = Some(time);
        let turnaround = time - self.arrival_time;
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }

    /// Records the first dispatch at `time`. Later calls are no-ops.
    pub fn mark_response(&mut self, time: i64) {
        if self.response_time.is_none() {
            self.response_time = Some(time - self.arrival_time);
        }
    }
}
