//! CPU scheduling simulation engine.
//!
//! Simulates classical single-CPU scheduling disciplines over a finite
//! process set, producing per-process metrics, a compacted execution
//! timeline, an ordered event log, and summary KPIs.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `TimelineBlock`,
//!   `Slot`, `EventLog`
//! - **`sim`**: The engine: `Algorithm`, `Simulator`, `SimulationResult`,
//!   `SimulationKpi`
//! - **`validation`**: Input integrity checks (duplicate IDs, negative
//!   times, quantum bounds)
//!
//! # Design
//!
//! Each run clones its input and returns a value: the engine holds no
//! state between invocations and never mutates caller data, so identical
//! inputs always reproduce identical output and concurrent callers need
//! no coordination.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts"
//! - Tanenbaum & Bos (2015), "Modern Operating Systems"

pub mod models;
pub mod sim;
pub mod validation;
