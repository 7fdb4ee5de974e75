//! Private working copies of a batch.

use std::collections::HashSet;

use crate::{Pid, Process, SimulationError};

/// The mutable state a simulation keeps about one process.
#[derive(Debug, Clone)]
pub(crate) struct SimProcess {
    pub process: Process,

    /// Position of the process in the caller's slice.
    pub index: usize,

    pub remaining_time: usize,
    pub completed: bool,
}

impl SimProcess {
    pub fn pid(&self) -> &Pid {
        &self.process.pid
    }

    pub fn arrival_time(&self) -> usize {
        self.process.arrival_time
    }

    fn is_available(&self, clock: usize) -> bool {
        !self.completed && self.process.arrival_time <= clock
    }
}

/// Validates the batch and copies it into simulation state.
///
/// The clock of a simulation never passes the latest arrival plus the sum of
/// all bursts, so a batch for which that bound fits in a `usize` cannot
/// overflow it.
///
/// The copies are returned in arrival scan order: ascending arrival time,
/// equal arrivals kept in input order. The position in the returned vector
/// is the secondary key of every tie-break.
pub(crate) fn normalize(processes: &[Process]) -> Result<Vec<SimProcess>, SimulationError> {
    let mut seen = HashSet::with_capacity(processes.len());
    for process in processes {
        if process.pid.is_empty() {
            return Err(SimulationError::EmptyPid);
        }
        if !seen.insert(&process.pid) {
            return Err(SimulationError::DuplicatePid(process.pid.clone()));
        }
        if process.burst_time == 0 {
            return Err(SimulationError::ZeroBurst(process.pid.clone()));
        }
    }

    let latest_arrival = processes.iter().map(|process| process.arrival_time).max();
    processes
        .iter()
        .try_fold(latest_arrival.unwrap_or(0), |end, process| {
            end.checked_add(process.burst_time)
        })
        .ok_or(SimulationError::TimeOverflow)?;

    let mut jobs: Vec<SimProcess> = processes
        .iter()
        .enumerate()
        .map(|(index, process)| SimProcess {
            process: process.clone(),
            index,
            remaining_time: process.burst_time,
            completed: false,
        })
        .collect();
    jobs.sort_by_key(|job| (job.process.arrival_time, job.index));

    Ok(jobs)
}

/// Returns the position of the available process with the smallest key.
///
/// Equal keys are resolved by scan order, so the earliest entry in `jobs` wins.
pub(crate) fn select<K, F>(jobs: &[SimProcess], clock: usize, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&SimProcess) -> K,
{
    jobs.iter()
        .enumerate()
        .filter(|(_, job)| job.is_available(clock))
        .min_by_key(|&(position, job)| (key(job), position))
        .map(|(position, _)| position)
}

/// The earliest arrival among the unfinished processes.
pub(crate) fn next_arrival(jobs: &[SimProcess]) -> Option<usize> {
    jobs.iter()
        .filter(|job| !job.completed)
        .map(SimProcess::arrival_time)
        .min()
}
