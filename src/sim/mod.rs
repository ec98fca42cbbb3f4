//! Scheduling disciplines and the simulation driver.
//!
//! Six classical single-CPU disciplines run over a validated process set:
//! FCFS, SJF, SRTF, priority (both variants), and round robin. Each run
//! operates on a private copy of the input, so a `Simulator` call never
//! mutates caller state and identical inputs always produce identical
//! output.
//!
//! # Usage
//!
//! ```
//! use cpusched::models::Process;
//! use cpusched::sim::{Algorithm, Simulator};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5).with_priority(2),
//!     Process::new("P2", 1, 3).with_priority(1),
//! ];
//! let result = Simulator::new()
//!     .run(&processes, Algorithm::Sjf)
//!     .expect("valid input");
//! assert!(result.processes.iter().all(|p| p.is_complete()));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod cpu;
mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use kpi::SimulationKpi;

use serde::{Deserialize, Serialize};

use crate::models::{EventLog, Process, Timeline};
use crate::validation::{validate_input, validate_quantum, ValidationError};

/// The scheduling discipline to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-come-first-served: non-preemptive, arrival order.
    Fcfs,
    /// Shortest job first: non-preemptive, minimum burst time.
    Sjf,
    /// Shortest remaining time first: preemptive SJF.
    Srtf,
    /// Priority, non-preemptive (lower value = more urgent).
    Priority,
    /// Priority, preemptive.
    PriorityPreemptive,
    /// Round robin with a fixed quantum.
    RoundRobin,
}

impl Algorithm {
    /// All six disciplines, in presentation order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::Priority,
        Algorithm::PriorityPreemptive,
        Algorithm::RoundRobin,
    ];

    /// Resolves a selector string. Unknown names fall back to FCFS, the
    /// documented default, so selection is total over arbitrary input.
    pub fn from_name(name: &str) -> Self {
        match name {
            "FCFS" => Algorithm::Fcfs,
            "SJF" => Algorithm::Sjf,
            "SRTF" => Algorithm::Srtf,
            "Priority" => Algorithm::Priority,
            "PriorityPreemptive" => Algorithm::PriorityPreemptive,
            "RR" => Algorithm::RoundRobin,
            _ => Algorithm::Fcfs,
        }
    }

    /// Canonical selector name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::Priority => "Priority",
            Algorithm::PriorityPreemptive => "PriorityPreemptive",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// One-line description of the discipline.
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => {
                "First Come First Serve: executes processes in the order they arrive. \
                 Simple and fair but can lead to the convoy effect."
            }
            Algorithm::Sjf => {
                "Shortest Job First (non-preemptive): selects the process with the \
                 shortest burst time. Minimizes average waiting time but can starve \
                 long processes."
            }
            Algorithm::Srtf => {
                "Shortest Remaining Time First (preemptive SJF): preempts the current \
                 process if a new one arrives with a shorter remaining time."
            }
            Algorithm::Priority => {
                "Priority (non-preemptive): selects the process with the highest \
                 priority (lower number = higher priority). Can cause starvation."
            }
            Algorithm::PriorityPreemptive => {
                "Priority (preemptive): preempts the current process if a new one \
                 arrives with higher priority."
            }
            Algorithm::RoundRobin => {
                "Round Robin: grants each process a fixed time quantum in cyclic \
                 order. Fair and responsive, good for time-sharing systems."
            }
        }
    }

    /// Whether the discipline re-evaluates its choice every time unit.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Algorithm::Srtf | Algorithm::PriorityPreemptive | Algorithm::RoundRobin
        )
    }
}

/// Input container for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Discipline to simulate.
    pub algorithm: Algorithm,
    /// Time quantum (round robin only).
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a new request.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Sets the round robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Outcome of one simulation run.
///
/// Owned by the caller; the engine keeps no state between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The simulated processes with every metric populated.
    pub processes: Vec<Process>,
    /// Compacted execution timeline.
    pub timeline: Timeline,
    /// Total ticks the CPU spent idle.
    pub idle_time: i64,
    /// Dispatch transitions between two different processes.
    pub context_switches: usize,
    /// Ordered narration of the run.
    pub events: EventLog,
}

/// Simulation driver.
///
/// Validates input, hands a private copy of the process set to the chosen
/// discipline, and assembles the result.
///
/// # Example
///
/// ```
/// use cpusched::models::Process;
/// use cpusched::sim::{Algorithm, Simulator};
///
/// let processes = vec![Process::new("P1", 0, 4)];
/// let result = Simulator::new()
///     .with_quantum(2)
///     .run(&processes, Algorithm::RoundRobin)
///     .expect("valid input");
/// assert_eq!(result.processes[0].completion_time, Some(4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    quantum: Option<i64>,
}

impl Simulator {
    /// Creates a simulator with no quantum configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the round robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Runs one simulation to completion.
    ///
    /// The caller's list is cloned; working fields are reset on the copy
    /// before the discipline runs. Validation failures are reported before
    /// any simulation work happens.
    pub fn run(
        &self,
        processes: &[Process],
        algorithm: Algorithm,
    ) -> Result<SimulationResult, Vec<ValidationError>> {
        validate_input(processes)?;

        let mut procs = processes.to_vec();
        for p in &mut procs {
            p.reset();
        }
        let mut cpu = cpu::Cpu::new();

        match algorithm {
            Algorithm::Fcfs => fcfs::run(&mut procs, &mut cpu),
            Algorithm::Sjf => sjf::run(&mut procs, &mut cpu),
            Algorithm::Srtf => srtf::run(&mut procs, &mut cpu),
            Algorithm::Priority => priority::run(&mut procs, &mut cpu),
            Algorithm::PriorityPreemptive => priority::run_preemptive(&mut procs, &mut cpu),
            Algorithm::RoundRobin => {
                let quantum = validate_quantum(self.quantum)?;
                round_robin::run(&mut procs, quantum, &mut cpu);
            }
        }

        Ok(cpu.into_result(procs))
    }

    /// Runs a bundled request. A quantum on the request overrides the
    /// simulator's own.
    pub fn run_request(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, Vec<ValidationError>> {
        let simulator = Self {
            quantum: request.quantum.or(self.quantum),
        };
        simulator.run(&request.processes, request.algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
            Process::new("P3", 2, 8).with_priority(3),
        ]
    }

    fn run_all(processes: &[Process]) -> Vec<(Algorithm, SimulationResult)> {
        let simulator = Simulator::new().with_quantum(2);
        Algorithm::ALL
            .iter()
            .map(|&a| (a, simulator.run(processes, a).unwrap()))
            .collect()
    }

    #[test]
    fn test_turnaround_equals_waiting_plus_burst_everywhere() {
        for (algorithm, result) in run_all(&sample_processes()) {
            for p in &result.processes {
                assert_eq!(
                    p.turnaround_time.unwrap(),
                    p.waiting_time.unwrap() + p.burst_time,
                    "{} violated turnaround identity for {}",
                    algorithm.name(),
                    p.id
                );
                assert!(p.completion_time.unwrap() >= p.arrival_time + p.burst_time);
                assert!(p.response_time.is_some());
            }
        }
    }

    #[test]
    fn test_every_tick_accounted_for() {
        let processes = vec![
            Process::new("P1", 2, 4).with_priority(1),
            Process::new("P2", 10, 3).with_priority(0),
        ];
        for (algorithm, result) in run_all(&processes) {
            let total_burst: i64 = result.processes.iter().map(|p| p.burst_time).sum();
            assert_eq!(
                total_burst + result.idle_time,
                result.timeline.makespan(),
                "{} lost or double-counted ticks",
                algorithm.name()
            );
        }
    }

    #[test]
    fn test_compacted_timeline_has_no_adjacent_duplicates() {
        for (algorithm, result) in run_all(&sample_processes()) {
            for pair in result.timeline.blocks().windows(2) {
                assert_ne!(
                    pair[0].slot,
                    pair[1].slot,
                    "{} produced adjacent duplicate blocks",
                    algorithm.name()
                );
            }
        }
    }

    #[test]
    fn test_single_process_under_every_algorithm() {
        let processes = vec![Process::new("P1", 0, 4).with_priority(1)];
        for (algorithm, result) in run_all(&processes) {
            let p = &result.processes[0];
            assert_eq!(p.completion_time, Some(4), "{}", algorithm.name());
            assert_eq!(p.waiting_time, Some(0), "{}", algorithm.name());
            assert_eq!(p.response_time, Some(0), "{}", algorithm.name());
            assert_eq!(result.idle_time, 0, "{}", algorithm.name());
            assert_eq!(result.context_switches, 0, "{}", algorithm.name());
        }
    }

    #[test]
    fn test_caller_list_untouched() {
        let processes = sample_processes();
        let before = processes.clone();
        let _ = Simulator::new().run(&processes, Algorithm::Srtf).unwrap();
        for (a, b) in processes.iter().zip(&before) {
            assert_eq!(a.remaining_time, b.remaining_time);
            assert_eq!(a.completion_time, b.completion_time);
        }
    }

    #[test]
    fn test_repeated_runs_identical() {
        let processes = sample_processes();
        let simulator = Simulator::new().with_quantum(2);
        for &algorithm in &Algorithm::ALL {
            let first = simulator.run(&processes, algorithm).unwrap();
            let second = simulator.run(&processes, algorithm).unwrap();
            assert_eq!(first.timeline, second.timeline);
            assert_eq!(first.context_switches, second.context_switches);
        }
    }

    #[test]
    fn test_invalid_input_rejected() {
        let errors = Simulator::new().run(&[], Algorithm::Fcfs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProcessList));
    }

    #[test]
    fn test_round_robin_requires_quantum() {
        let errors = Simulator::new()
            .run(&sample_processes(), Algorithm::RoundRobin)
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum));
    }

    #[test]
    fn test_run_request_quantum_override() {
        let request =
            SimulationRequest::new(sample_processes(), Algorithm::RoundRobin).with_quantum(3);
        let result = Simulator::new().run_request(&request).unwrap();
        assert!(result.processes.iter().all(|p| p.is_complete()));
    }

    #[test]
    fn test_from_name_resolves_known_selectors() {
        assert_eq!(Algorithm::from_name("FCFS"), Algorithm::Fcfs);
        assert_eq!(Algorithm::from_name("SJF"), Algorithm::Sjf);
        assert_eq!(Algorithm::from_name("SRTF"), Algorithm::Srtf);
        assert_eq!(Algorithm::from_name("Priority"), Algorithm::Priority);
        assert_eq!(
            Algorithm::from_name("PriorityPreemptive"),
            Algorithm::PriorityPreemptive
        );
        assert_eq!(Algorithm::from_name("RR"), Algorithm::RoundRobin);
    }

    #[test]
    fn test_from_name_unknown_defaults_to_fcfs() {
        assert_eq!(Algorithm::from_name("LOTTERY"), Algorithm::Fcfs);
        assert_eq!(Algorithm::from_name(""), Algorithm::Fcfs);
    }

    #[test]
    fn test_name_round_trips_and_descriptions_exist() {
        for &algorithm in &Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.name()), algorithm);
            assert!(!algorithm.description().is_empty());
        }
    }

    #[test]
    fn test_preemptive_classification() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(!Algorithm::Priority.is_preemptive());
        assert!(Algorithm::Srtf.is_preemptive());
        assert!(Algorithm::PriorityPreemptive.is_preemptive());
        assert!(Algorithm::RoundRobin.is_preemptive());
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = Simulator::new()
            .with_quantum(2)
            .run(&sample_processes(), Algorithm::RoundRobin)
            .unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: SimulationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.timeline, result.timeline);
        assert_eq!(back.context_switches, result.context_switches);
        assert_eq!(back.processes.len(), result.processes.len());
    }

    #[test]
    fn test_process_deserializes_from_input_shape() {
        let json = r#"{
            "id": "P1",
            "arrival_time": 0,
            "burst_time": 5,
            "priority": 2,
            "remaining_time": 5,
            "completion_time": null,
            "turnaround_time": null,
            "waiting_time": null,
            "response_time": null
        }"#;
        let p: Process = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "P1");
        assert_eq!(p.burst_time, 5);
        assert!(!p.is_complete());
    }
}
