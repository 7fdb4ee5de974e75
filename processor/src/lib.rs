//! A batch processing library
//!
//! This is used for comparing the policies from the [`scheduler`] crate
//! on the same batch of processes.

use std::fmt::Display;
use std::thread;

use log::{info, warn};
use scheduler::{Policy, Process, SimulationError, SimulationResult};

mod chart;

pub use chart::{render_gantt, MAX_COLUMNS};

/// The outcome of one policy on the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The policy that was simulated.
    pub policy: Policy,

    /// The simulation result, or the reason the policy refused the batch.
    pub outcome: Result<SimulationResult, SimulationError>,
}

impl Report {
    fn new(policy: Policy, outcome: Result<SimulationResult, SimulationError>) -> Report {
        Report { policy, outcome }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "== {} ==", self.policy)?;
        match &self.outcome {
            Ok(result) => {
                write!(f, "{}", render_gantt(&result.gantt_chart))?;
                writeln!(f, "PID\tARRIVAL\tBURST\tPRI\tCOMPLETION\tTURNAROUND\tWAITING")?;
                for process in &result.process_results {
                    writeln!(
                        f,
                        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                        process.pid,
                        process.arrival_time,
                        process.burst_time,
                        process.priority,
                        process.completion_time,
                        process.turnaround_time,
                        process.waiting_time
                    )?;
                }
                writeln!(f, "Average waiting time: {:.2}", result.avg_waiting_time)?;
                writeln!(f, "Average turnaround time: {:.2}", result.avg_turnaround_time)?;
            }
            Err(error) => writeln!(f, "error: {}", error)?,
        }
        writeln!(f)
    }
}

/// Runs a batch through several policies.
pub struct Processor {
    policies: Vec<Policy>,
    parallel: bool,
}

impl Processor {
    /// A processor that simulates every policy on its own thread.
    pub fn new(policies: impl IntoIterator<Item = Policy>) -> Processor {
        Processor {
            policies: policies.into_iter().collect(),
            parallel: true,
        }
    }

    /// Simulates the policies one after the other on the calling thread.
    pub fn sequential(mut self) -> Processor {
        self.parallel = false;
        self
    }

    /// Simulates `processes` under every policy.
    ///
    /// The reports come back in the order of the policies. A policy that
    /// rejects the batch does not stop the others.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::{Policy, Process};
    ///
    /// let processes = vec![Process::new("P1", 0, 5, 1), Process::new("P2", 1, 3, 1)];
    /// let reports = Processor::new(Policy::all(2)).run(&processes);
    ///
    /// assert_eq!(reports.len(), 5);
    /// ```
    pub fn run(&self, processes: &[Process]) -> Vec<Report> {
        let outcomes: Vec<Result<SimulationResult, SimulationError>> = if self.parallel {
            thread::scope(|s| {
                let handles: Vec<_> = self
                    .policies
                    .iter()
                    .map(|policy| s.spawn(move || policy.simulate(processes)))
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| {
                        handle
                            .join()
                            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                    })
                    .collect()
            })
        } else {
            self.policies
                .iter()
                .map(|policy| policy.simulate(processes))
                .collect()
        };

        self.policies
            .iter()
            .zip(outcomes)
            .map(|(&policy, outcome)| {
                match &outcome {
                    Ok(result) => info!(
                        "{}: average waiting {:.2}, average turnaround {:.2}",
                        policy, result.avg_waiting_time, result.avg_turnaround_time
                    ),
                    Err(error) => warn!("{}: {}", policy, error),
                }
                Report::new(policy, outcome)
            })
            .collect()
    }
}

/// The policy with the lowest value of one average.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Best {
    pub policy: Policy,
    pub average: f64,
}

/// The best policies of a comparison.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Recommendation {
    pub waiting: Best,
    pub turnaround: Best,
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Best average waiting time: {} ({:.2})",
            self.waiting.policy, self.waiting.average
        )?;
        writeln!(
            f,
            "Best average turnaround time: {} ({:.2})",
            self.turnaround.policy, self.turnaround.average
        )
    }
}

fn lowest<F>(reports: &[Report], average: F) -> Option<Best>
where
    F: Fn(&SimulationResult) -> f64,
{
    reports
        .iter()
        .filter_map(|report| {
            report.outcome.as_ref().ok().map(|result| Best {
                policy: report.policy,
                average: average(result),
            })
        })
        .fold(None, |best: Option<Best>, current| match best {
            Some(best) if best.average <= current.average => Some(best),
            _ => Some(current),
        })
}

/// Picks the policies with the lowest average waiting and turnaround time.
///
/// On a tie the earlier report wins. Failed reports are skipped, `None` is
/// returned when no report succeeded.
pub fn recommend(reports: &[Report]) -> Option<Recommendation> {
    Some(Recommendation {
        waiting: lowest(reports, |result| result.avg_waiting_time)?,
        turnaround: lowest(reports, |result| result.avg_turnaround_time)?,
    })
}

/// Format the [`Processor`]'s reports to a [`String`].
///
/// * `reports` - the reports returned by the [`Processor`].
///
/// The recommendation is appended after the last report.
pub fn format_reports(reports: &[Report]) -> String {
    let mut s = String::new();
    for report in reports {
        s.push_str(&report.to_string());
    }
    if let Some(recommendation) = recommend(reports) {
        s.push_str(&recommendation.to_string());
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn batch() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5, 2),
            Process::new("P2", 1, 3, 1),
            Process::new("P3", 2, 8, 3),
        ]
    }

    #[test]
    fn reports_follow_policy_order() {
        let reports = Processor::new(Policy::all(4)).run(&batch());
        let policies: Vec<Policy> = reports.iter().map(|report| report.policy).collect();
        assert_eq!(policies, Policy::all(4).to_vec());
        assert!(reports.iter().all(|report| report.outcome.is_ok()));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let parallel = Processor::new(Policy::all(3)).run(&batch());
        let sequential = Processor::new(Policy::all(3)).sequential().run(&batch());
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn failing_policy_is_isolated() {
        let reports = Processor::new(Policy::all(0)).run(&batch());
        assert_eq!(reports[4].outcome, Err(SimulationError::ZeroQuantum));
        assert!(reports[..4].iter().all(|report| report.outcome.is_ok()));
    }

    #[test]
    fn recommendation_prefers_earliest_on_ties() {
        let reports = Processor::new(Policy::all(4)).run(&batch());
        let recommendation = recommend(&reports).unwrap();
        // SRTF preempts P1 for P2, the non-preemptive policies wait 3.33
        assert_eq!(
            recommendation.waiting,
            Best {
                policy: Policy::Srtf,
                average: 3.0
            }
        );
        assert_eq!(recommendation.turnaround.policy, Policy::Srtf);

        let reports = Processor::new([Policy::Sjf, Policy::Fcfs]).run(&batch());
        assert_eq!(recommend(&reports).unwrap().waiting.policy, Policy::Sjf);
    }

    #[test]
    fn no_recommendation_without_results() {
        let reports = Processor::new([Policy::RoundRobin(0)]).run(&batch());
        assert_eq!(recommend(&reports), None);
        assert_eq!(
            format_reports(&reports),
            "== Round Robin (quantum 0) ==\nerror: time quantum must be greater than zero\n\n"
        );
    }

    #[test]
    fn report_layout() {
        let reports = Processor::new([Policy::Fcfs]).run(&batch());
        assert_eq!(
            format_reports(&reports),
            "== FCFS ==\n\
             | P1  |P2 |   P3   |\n\
             0     5   8        16\n\
             PID\tARRIVAL\tBURST\tPRI\tCOMPLETION\tTURNAROUND\tWAITING\n\
             P1\t0\t5\t2\t5\t5\t0\n\
             P2\t1\t3\t1\t8\t7\t4\n\
             P3\t2\t8\t3\t16\t14\t6\n\
             Average waiting time: 3.33\n\
             Average turnaround time: 8.67\n\
             \n\
             Best average waiting time: FCFS (3.33)\n\
             Best average turnaround time: FCFS (8.67)\n"
        );
    }
}
