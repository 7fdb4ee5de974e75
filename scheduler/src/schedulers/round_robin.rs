use std::collections::VecDeque;
use std::num::NonZeroUsize;

use log::debug;

use crate::gantt::Timeline;
use crate::stats::assemble;
use crate::workload::normalize;
use crate::{Occupant, Process, ProcessResult, Scheduler, SimulationError, SimulationResult};

/// Round Robin with a fixed time quantum.
///
/// Jobs wait in a FIFO ready queue. A job that uses its whole quantum goes to
/// the back of the queue, behind the jobs that arrived while it was running.
pub struct RoundRobin {
    quantum: NonZeroUsize,
}

impl RoundRobin {
    pub const NAME: &'static str = "Round Robin";

    pub fn new(quantum: NonZeroUsize) -> Self {
        RoundRobin { quantum }
    }

    /// Fails with [`SimulationError::ZeroQuantum`] for a quantum of 0.
    pub fn try_new(quantum: usize) -> Result<Self, SimulationError> {
        NonZeroUsize::new(quantum)
            .map(RoundRobin::new)
            .ok_or(SimulationError::ZeroQuantum)
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        RoundRobin::NAME
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        let mut jobs = normalize(processes)?;
        let mut timeline = Timeline::new();
        let mut results = Vec::with_capacity(jobs.len());
        let mut ready_queue: VecDeque<usize> = VecDeque::new();
        let mut next_to_arrive = 0;
        let mut clock = 0;

        while results.len() < jobs.len() {
            while next_to_arrive < jobs.len() && jobs[next_to_arrive].arrival_time() <= clock {
                ready_queue.push_back(next_to_arrive);
                next_to_arrive += 1;
            }

            let Some(position) = ready_queue.pop_front() else {
                if next_to_arrive == jobs.len() {
                    return Err(SimulationError::Stalled {
                        clock,
                        pending: jobs.len() - results.len(),
                    });
                }
                let arrival = jobs[next_to_arrive].arrival_time();
                timeline.idle(clock, arrival);
                clock = arrival;
                continue;
            };

            let job = &mut jobs[position];
            let slice = job.remaining_time.min(self.quantum.get());
            debug!("Round Robin: {} runs {}-{}", job.pid(), clock, clock + slice);
            timeline.push(Occupant::from(job.pid()), clock, clock + slice);
            job.remaining_time -= slice;
            clock += slice;

            if job.remaining_time == 0 {
                job.completed = true;
                results.push((job.index, ProcessResult::finished(&job.process, clock)));
            }

            // arrivals during the slice queue up before the preempted job
            while next_to_arrive < jobs.len() && jobs[next_to_arrive].arrival_time() <= clock {
                ready_queue.push_back(next_to_arrive);
                next_to_arrive += 1;
            }
            if !jobs[position].completed {
                ready_queue.push_back(position);
            }
        }

        results.sort_by_key(|(index, _)| *index);
        let results = results.into_iter().map(|(_, result)| result).collect();

        Ok(assemble(results, timeline))
    }
}
