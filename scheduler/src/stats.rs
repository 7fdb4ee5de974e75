//! Averages and final packaging of a simulation.

use crate::gantt::Timeline;
use crate::{ProcessResult, SimulationResult};

/// The arithmetic mean rounded to 2 decimals, 0 for no values.
///
/// Halves round away from zero. The rounding is done on the integer totals,
/// so a mean such as `0.575` is never seen as `0.57499..` first.
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0u128, 0u128), |(sum, count), value| (sum + value as u128, count + 1));
    if count == 0 {
        return 0.0;
    }
    let hundredths = (sum * 200 + count) / (2 * count);
    hundredths as f64 / 100.0
}

/// Sorts the results by pid, merges the chart and computes the averages.
pub(crate) fn assemble(
    mut process_results: Vec<ProcessResult>,
    timeline: Timeline,
) -> SimulationResult {
    process_results.sort_by(|a, b| a.pid.cmp(&b.pid));

    let avg_waiting_time = average(process_results.iter().map(|result| result.waiting_time));
    let avg_turnaround_time = average(process_results.iter().map(|result| result.turnaround_time));

    SimulationResult {
        process_results,
        gantt_chart: timeline.into_merged(),
        avg_waiting_time,
        avg_turnaround_time,
    }
}
