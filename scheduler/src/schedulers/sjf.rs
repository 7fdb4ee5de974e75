use super::non_preemptive;
use crate::{Process, Scheduler, SimulationError, SimulationResult};

/// Shortest-Job-First, non-preemptive.
///
/// Among the jobs that have arrived, the one with the smallest burst time runs
/// to completion.
pub struct Sjf;

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        non_preemptive::simulate(self.name(), processes, |job| job.process.burst_time)
    }
}
