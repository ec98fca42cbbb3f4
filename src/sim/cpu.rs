//! Shared scheduling-loop scaffolding.
//!
//! Every discipline drives a `Cpu`: a simulation clock plus the raw
//! timeline, event log, idle counter, and context-switch counter that
//! accumulate as processes are dispatched. The disciplines differ only in
//! *which* process they hand to `dispatch` and for how long.

use crate::models::{EventLog, Process, Slot, Timeline};

use super::SimulationResult;

/// Simulation clock and run bookkeeping.
///
/// Context switches follow one rule for all disciplines: a switch is
/// counted only when the previous occupant was a process and a *different*
/// process is dispatched. Idle periods never participate: neither
/// entering idle nor leaving it costs a switch.
pub(super) struct Cpu {
    now: i64,
    timeline: Timeline,
    events: EventLog,
    idle_time: i64,
    context_switches: usize,
    last: Option<Slot>,
}

impl Cpu {
    pub(super) fn new() -> Self {
        Self {
            now: 0,
            timeline: Timeline::new(),
            events: EventLog::new(),
            idle_time: 0,
            context_switches: 0,
            last: None,
        }
    }

    /// Current simulation time.
    pub(super) fn now(&self) -> i64 {
        self.now
    }

    /// Records an event at the current time.
    pub(super) fn log(&mut self, message: impl Into<String>) {
        self.events.record(self.now, message);
    }

    /// Records an event at an explicit time. Round robin uses this to
    /// timestamp arrivals that happened mid-slice.
    pub(super) fn log_at(&mut self, time: i64, message: impl Into<String>) {
        self.events.record(time, message);
    }

    /// Advances the clock to `until`, emitting one idle block spanning the
    /// whole gap. `until` must lie strictly in the future.
    pub(super) fn idle_until(&mut self, until: i64) {
        self.log(format!("CPU idle until {until}"));
        self.timeline.push(Slot::Idle, self.now, until);
        self.idle_time += until - self.now;
        self.now = until;
        self.last = Some(Slot::Idle);
    }

    /// Executes `units` ticks of `process`: switch and response bookkeeping,
    /// one raw timeline block, clock and `remaining_time` updates.
    ///
    /// Completion is left to [`Cpu::complete`] so callers control event
    /// ordering around the end of a slice.
    pub(super) fn dispatch(&mut self, process: &mut Process, units: i64) {
        let same_occupant =
            matches!(&self.last, Some(Slot::Process(prev)) if *prev == process.id);
        if !same_occupant {
            if matches!(&self.last, Some(Slot::Process(_))) {
                self.context_switches += 1;
                self.log(format!("context switch to {}", process.id));
            } else {
                self.log(format!("dispatching {}", process.id));
            }
        }

        process.mark_response(self.now);

        let start = self.now;
        self.now += units;
        self.timeline
            .push(Slot::Process(process.id.clone()), start, self.now);
        process.remaining_time -= units;
        self.last = Some(Slot::Process(process.id.clone()));
    }

    /// Finalizes a finished process at the current time.
    pub(super) fn complete(&mut self, process: &mut Process) {
        process.complete_at(self.now);
        self.log(format!("{} completed", process.id));
    }

    /// Compacts the timeline and assembles the run's result.
    pub(super) fn into_result(mut self, processes: Vec<Process>) -> SimulationResult {
        self.timeline.compact();
        SimulationResult {
            processes,
            timeline: self.timeline,
            idle_time: self.idle_time,
            context_switches: self.context_switches,
            events: self.events,
        }
    }
}

/// Earliest arrival among processes that have not completed.
pub(super) fn next_arrival(processes: &[Process]) -> Option<i64> {
    processes
        .iter()
        .filter(|p| !p.is_complete())
        .map(|p| p.arrival_time)
        .min()
}
