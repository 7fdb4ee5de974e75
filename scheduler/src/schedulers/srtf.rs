use log::{debug, trace};

use crate::gantt::Timeline;
use crate::stats::assemble;
use crate::workload::{next_arrival, normalize, select};
use crate::{Process, ProcessResult, Scheduler, SimulationError, SimulationResult};

/// Shortest-Remaining-Time-First, the preemptive variant of SJF.
///
/// Time advances one unit at a time. At every tick the arrived job with the
/// least remaining time gets the CPU, so a shorter arrival preempts the
/// running job. Idle stretches are skipped in a single jump.
pub struct Srtf;

impl Scheduler for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        let mut jobs = normalize(processes)?;
        let mut timeline = Timeline::new();
        let mut results = Vec::with_capacity(jobs.len());
        let mut clock = 0;

        while results.len() < jobs.len() {
            let Some(position) = select(&jobs, clock, |job| job.remaining_time) else {
                match next_arrival(&jobs) {
                    Some(arrival) if arrival > clock => {
                        timeline.idle(clock, arrival);
                        clock = arrival;
                        continue;
                    }
                    _ => {
                        return Err(SimulationError::Stalled {
                            clock,
                            pending: jobs.len() - results.len(),
                        })
                    }
                }
            };

            let job = &mut jobs[position];
            trace!("SRTF: t={} {} ({} left)", clock, job.pid(), job.remaining_time);
            timeline.extend_or_push(job.pid(), clock, clock + 1);
            job.remaining_time -= 1;
            clock += 1;

            if job.remaining_time == 0 {
                debug!("SRTF: {} completes at {}", job.pid(), clock);
                job.completed = true;
                results.push(ProcessResult::finished(&job.process, clock));
            }
        }

        Ok(assemble(results, timeline))
    }
}
