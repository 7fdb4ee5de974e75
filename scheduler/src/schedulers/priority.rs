use super::non_preemptive;
use crate::{Process, Scheduler, SimulationError, SimulationResult};

/// Non-preemptive priority scheduling, lower values run first.
///
/// A running job is never interrupted, even by a more important arrival.
pub struct PriorityScheduler;

impl Scheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError> {
        non_preemptive::simulate(self.name(), processes, |job| job.process.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedulers::checks::{chart, check_invariants};
    use pretty_assertions::assert_eq;

    #[test]
    fn runs_lowest_value_first() {
        let processes = vec![
            Process::new("P1", 0, 4, 3),
            Process::new("P2", 1, 3, 1),
            Process::new("P3", 2, 2, 4),
            Process::new("P4", 3, 1, -2),
        ];
        let result = PriorityScheduler.simulate(&processes).unwrap();
        assert_eq!(chart(&result), "P1:0-4 P4:4-5 P2:5-8 P3:8-10");

        let waits: Vec<usize> = result
            .process_results
            .iter()
            .map(|result| result.waiting_time)
            .collect();
        assert_eq!(waits, vec![0, 4, 6, 1]);
        assert_eq!(result.avg_waiting_time, 2.75);
        check_invariants(&processes, &result, false);
    }

    #[test]
    fn equal_priorities_keep_arrival_order() {
        let processes = vec![
            Process::new("late", 1, 1, 1),
            Process::new("first", 0, 2, 1),
            Process::new("second", 0, 2, 1),
        ];
        let result = PriorityScheduler.simulate(&processes).unwrap();
        assert_eq!(chart(&result), "first:0-2 second:2-4 late:4-5");
    }
}
