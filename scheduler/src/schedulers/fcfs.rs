use log::debug;

use crate::gantt::Timeline;
use crate::stats::assemble;
use crate::workload::normalize;
use crate::{Occupant, Process, ProcessResult, Scheduler, SimulationError, SimulationResult};

/// First-Come-First-Served: jobs run to completion in arrival order.
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        let jobs = normalize(processes)?;
        let mut timeline = Timeline::new();
        let mut results = Vec::with_capacity(jobs.len());
        let mut clock = 0;

        for job in &jobs {
            if clock < job.arrival_time() {
                timeline.idle(clock, job.arrival_time());
                clock = job.arrival_time();
            }

            let completion_time = clock + job.remaining_time;
            debug!("FCFS: {} runs {}-{}", job.pid(), clock, completion_time);
            timeline.push(Occupant::from(job.pid()), clock, completion_time);
            results.push(ProcessResult::finished(&job.process, completion_time));
            clock = completion_time;
        }

        Ok(assemble(results, timeline))
    }
}
