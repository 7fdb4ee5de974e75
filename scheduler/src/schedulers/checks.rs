//! Properties every simulation result must hold, shared by the policy tests.

use std::collections::HashMap;

use crate::stats::average;
use crate::{Pid, Process, SimulationResult};

/// P1(0, 5), P2(1, 3), P3(2, 8)
pub fn scenario() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 5, 2),
        Process::new("P2", 1, 3, 1),
        Process::new("P3", 2, 8, 3),
    ]
}

/// The chart as `occupant:start-end` entries separated by spaces.
pub fn chart(result: &SimulationResult) -> String {
    result
        .gantt_chart
        .iter()
        .map(|block| block.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn check_invariants(processes: &[Process], result: &SimulationResult, preemptive: bool) {
    assert_eq!(result.process_results.len(), processes.len());

    for pair in result.process_results.windows(2) {
        assert!(pair[0].pid < pair[1].pid, "results are not sorted by pid");
    }

    for process_result in &result.process_results {
        assert_eq!(
            process_result.turnaround_time,
            process_result.completion_time - process_result.arrival_time
        );
        assert_eq!(
            process_result.waiting_time + process_result.burst_time,
            process_result.turnaround_time
        );
    }

    let mut clock = 0;
    for (index, block) in result.gantt_chart.iter().enumerate() {
        assert!(block.start < block.end, "empty block {}", block);
        assert_eq!(block.start, clock, "gap or overlap before {}", block);
        if index > 0 {
            assert_ne!(result.gantt_chart[index - 1].occupant, block.occupant);
        }
        clock = block.end;
    }

    let mut cpu_time: HashMap<&Pid, usize> = HashMap::new();
    let mut blocks: HashMap<&Pid, usize> = HashMap::new();
    for block in &result.gantt_chart {
        if let Some(pid) = block.occupant.pid() {
            *cpu_time.entry(pid).or_default() += block.duration();
            *blocks.entry(pid).or_default() += 1;
        }
    }
    for process in processes {
        assert_eq!(cpu_time.get(&process.pid), Some(&process.burst_time));
        if !preemptive {
            assert_eq!(blocks.get(&process.pid), Some(&1), "{} was preempted", process.pid);
        }
    }

    for process_result in &result.process_results {
        let last_block = result
            .gantt_chart
            .iter()
            .rev()
            .find(|block| block.occupant.pid() == Some(&process_result.pid));
        assert_eq!(last_block.map(|block| block.end), Some(process_result.completion_time));
    }

    assert_eq!(
        result.avg_waiting_time,
        average(result.process_results.iter().map(|result| result.waiting_time))
    );
    assert_eq!(
        result.avg_turnaround_time,
        average(result.process_results.iter().map(|result| result.turnaround_time))
    );
}
