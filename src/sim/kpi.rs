//! Run quality metrics.
//!
//! Summary indicators derived from a completed run:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion − arrival) |
//! | Avg Waiting | mean(turnaround − burst) |
//! | CPU Utilization | Σ burst / makespan × 100 |
//! | Makespan | End of the last timeline block |
//!
//! Pure reductions: computing them never alters the result.

use super::SimulationResult;

/// Summary performance indicators for one run.
#[derive(Debug, Clone)]
pub struct SimulationKpi {
    /// Mean turnaround time across all processes (ticks).
    pub avg_turnaround: f64,
    /// Mean waiting time across all processes (ticks).
    pub avg_waiting: f64,
    /// Percentage of elapsed time the CPU spent executing (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Total elapsed simulation time (ticks).
    pub makespan: i64,
}

impl SimulationKpi {
    /// Computes KPIs from a completed run.
    pub fn calculate(result: &SimulationResult) -> Self {
        let count = result.processes.len();
        let total_turnaround: i64 = result
            .processes
            .iter()
            .filter_map(|p| p.turnaround_time)
            .sum();
        let total_waiting: i64 = result.processes.iter().filter_map(|p| p.waiting_time).sum();
        let total_burst: i64 = result.processes.iter().map(|p| p.burst_time).sum();
        let makespan = result.timeline.makespan();

        let (avg_turnaround, avg_waiting) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround as f64 / count as f64,
                total_waiting as f64 / count as f64,
            )
        };

        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            total_burst as f64 / makespan as f64 * 100.0
        };

        Self {
            avg_turnaround,
            avg_waiting,
            cpu_utilization,
            makespan,
        }
    }
}
