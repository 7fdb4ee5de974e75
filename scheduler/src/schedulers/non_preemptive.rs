use log::debug;

use crate::gantt::Timeline;
use crate::stats::assemble;
use crate::workload::{next_arrival, normalize, select, SimProcess};
use crate::{Occupant, Process, ProcessResult, SimulationError, SimulationResult};

/// Repeatedly runs the available job with the smallest `key` to completion.
///
/// When no job is available the CPU idles until the next arrival.
pub(super) fn simulate<K, F>(
    label: &str,
    processes: &[Process],
    key: F,
) -> Result<SimulationResult, SimulationError>
where
    K: Ord,
    F: Fn(&SimProcess) -> K,
{
    let mut jobs = normalize(processes)?;
    let mut timeline = Timeline::new();
    let mut results = Vec::with_capacity(jobs.len());
    let mut clock = 0;

    while results.len() < jobs.len() {
        let Some(position) = select(&jobs, clock, &key) else {
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
        let completion_time = clock + job.remaining_time;
        debug!("{}: {} runs {}-{}", label, job.pid(), clock, completion_time);
        timeline.push(Occupant::from(job.pid()), clock, completion_time);
        job.remaining_time = 0;
        job.completed = true;
        results.push(ProcessResult::finished(&job.process, completion_time));
        clock = completion_time;
    }

    Ok(assemble(results, timeline))
}
