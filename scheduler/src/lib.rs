//! A CPU scheduling simulation library.
//!
//! This library replays a fixed batch of processes under the classic
//! scheduling policies and reports, for each policy, the CPU timeline
//! (a Gantt chart) and the waiting and turnaround times of every process.
//!
//! ```rust
//! use scheduler::{simulate_rr, Process};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5, 1),
//!     Process::new("P2", 1, 3, 1),
//!     Process::new("P3", 2, 8, 1),
//! ];
//! let result = simulate_rr(&processes, 4).unwrap();
//! assert_eq!(result.avg_waiting_time, 5.33);
//! ```
//!

use std::num::NonZeroUsize;

mod gantt;
mod parse;
mod policy;
mod scheduler;
mod schedulers;
mod stats;
mod workload;

pub use crate::gantt::merge;
pub use crate::parse::{parse_process_table, ParseProcessError};
pub use crate::policy::Policy;
pub use crate::scheduler::{
    GanttBlock, Occupant, Pid, Process, ProcessResult, Scheduler, SimulationError,
    SimulationResult,
};
pub use crate::schedulers::{Fcfs, PriorityScheduler, RoundRobin, Sjf, Srtf};
pub use crate::stats::average;

/// Returns a First-Come-First-Served scheduler.
pub fn fcfs() -> impl Scheduler {
    Fcfs
}

/// Returns a non-preemptive Shortest-Job-First scheduler.
pub fn sjf() -> impl Scheduler {
    Sjf
}

/// Returns a Shortest-Remaining-Time-First scheduler.
pub fn srtf() -> impl Scheduler {
    Srtf
}

/// Returns a non-preemptive priority scheduler.
pub fn priority() -> impl Scheduler {
    PriorityScheduler
}

/// Returns a Round Robin scheduler.
///
/// * `quantum` - the time a process can run before it is preempted
pub fn round_robin(quantum: NonZeroUsize) -> impl Scheduler {
    RoundRobin::new(quantum)
}

/// Simulates the batch under First-Come-First-Served.
pub fn simulate_fcfs(processes: &[Process]) -> Result<SimulationResult, SimulationError> {
    Fcfs.simulate(processes)
}

/// Simulates the batch under non-preemptive Shortest-Job-First.
pub fn simulate_sjf(processes: &[Process]) -> Result<SimulationResult, SimulationError> {
    Sjf.simulate(processes)
}

/// Simulates the batch under Shortest-Remaining-Time-First.
pub fn simulate_srtf(processes: &[Process]) -> Result<SimulationResult, SimulationError> {
    Srtf.simulate(processes)
}

/// Simulates the batch under non-preemptive priority scheduling.
pub fn simulate_priority(processes: &[Process]) -> Result<SimulationResult, SimulationError> {
    PriorityScheduler.simulate(processes)
}

/// Simulates the batch under Round Robin.
///
/// * `time_quantum` - must be greater than 0, otherwise
///                    [`SimulationError::ZeroQuantum`] is returned.
pub fn simulate_rr(
    processes: &[Process],
    time_quantum: usize,
) -> Result<SimulationResult, SimulationError> {
    RoundRobin::try_new(time_quantum)?.simulate(processes)
}
