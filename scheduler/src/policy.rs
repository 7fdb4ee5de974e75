use std::fmt::{self, Display};

use crate::{
    Fcfs, PriorityScheduler, Process, RoundRobin, Scheduler, SimulationError, SimulationResult,
    Sjf, Srtf,
};

/// The policies a batch can be simulated with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sjf,
    Srtf,
    Priority,
    /// Round Robin with the given time quantum.
    RoundRobin(usize),
}

impl Policy {
    /// All five policies, in report order.
    pub fn all(quantum: usize) -> [Policy; 5] {
        [
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Srtf,
            Policy::Priority,
            Policy::RoundRobin(quantum),
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => Fcfs.name(),
            Policy::Sjf => Sjf.name(),
            Policy::Srtf => Srtf.name(),
            Policy::Priority => PriorityScheduler.name(),
            Policy::RoundRobin(_) => RoundRobin::NAME,
        }
    }

    /// Runs the batch under this policy.
    pub fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        match *self {
            Policy::Fcfs => Fcfs.simulate(processes),
            Policy::Sjf => Sjf.simulate(processes),
            Policy::Srtf => Srtf.simulate(processes),
            Policy::Priority => PriorityScheduler.simulate(processes),
            Policy::RoundRobin(quantum) => RoundRobin::try_new(quantum)?.simulate(processes),
        }
    }
}

impl Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin(quantum) => write!(f, "{} (quantum {})", self.name(), quantum),
            _ => write!(f, "{}", self.name()),
        }
    }
}
