use std::error::Error;
use std::fmt::{self, Display};

/// The identifier of a process.
///
/// Identifiers are compared byte-wise, which is also the order used
/// when results are listed.
#[derive(PartialEq, Eq, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(String);

impl Pid {
    pub fn new(pid: impl Into<String>) -> Pid {
        Pid(pid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for Pid {
    fn from(pid: &str) -> Self {
        Pid::new(pid)
    }
}

impl PartialEq<&str> for Pid {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A process of the batch, as entered by the user.
///
/// The engine never modifies these records, every simulation works
/// on its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,

    /// The moment the process becomes eligible for the CPU.
    pub arrival_time: usize,

    /// The total CPU time the process needs. Must be greater than 0.
    pub burst_time: usize,

    /// Lower values mean higher priority.
    pub priority: i32,
}

impl Process {
    pub fn new(
        pid: impl Into<String>,
        arrival_time: usize,
        burst_time: usize,
        priority: i32,
    ) -> Self {
        Process {
            pid: Pid::new(pid),
            arrival_time,
            burst_time,
            priority,
        }
    }
}

/// The outcome of a single process after a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub pid: Pid,
    pub arrival_time: usize,
    pub burst_time: usize,
    pub priority: i32,

    /// The moment the process finished all its CPU work.
    pub completion_time: usize,

    /// `completion_time - arrival_time`
    pub turnaround_time: usize,

    /// `turnaround_time - burst_time`
    pub waiting_time: usize,
}

impl ProcessResult {
    /// Builds the result of `process` finishing at `completion_time`.
    ///
    /// The completion time can never be earlier than `arrival_time + burst_time`.
    pub fn finished(process: &Process, completion_time: usize) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        ProcessResult {
            pid: process.pid.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }
}

/// Who holds the CPU during a [`GanttBlock`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Occupant {
    /// No process was ready.
    Idle,
    Process(Pid),
}

impl Occupant {
    pub fn pid(&self) -> Option<&Pid> {
        match self {
            Occupant::Idle => None,
            Occupant::Process(pid) => Some(pid),
        }
    }
}

impl From<&Pid> for Occupant {
    fn from(pid: &Pid) -> Self {
        Occupant::Process(pid.clone())
    }
}

impl Display for Occupant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Occupant::Idle => write!(f, "IDLE"),
            Occupant::Process(pid) => write!(f, "{}", pid),
        }
    }
}

/// A half open interval `[start, end)` of CPU occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttBlock {
    pub occupant: Occupant,
    pub start: usize,
    pub end: usize,
}

impl GanttBlock {
    pub fn new(occupant: Occupant, start: usize, end: usize) -> Self {
        GanttBlock {
            occupant,
            start,
            end,
        }
    }

    pub fn duration(&self) -> usize {
        self.end - self.start
    }
}

impl Display for GanttBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.occupant, self.start, self.end)
    }
}

/// Everything a policy produces for one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Sorted by pid.
    pub process_results: Vec<ProcessResult>,

    /// Chronological, contiguous and merged.
    pub gantt_chart: Vec<GanttBlock>,

    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
}

impl SimulationResult {
    /// The moment the last block ends, 0 for an empty chart.
    pub fn makespan(&self) -> usize {
        self.gantt_chart.last().map_or(0, |block| block.end)
    }
}

/// The reasons a simulation can refuse to run or stop early.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A process has an empty identifier.
    EmptyPid,

    /// Two processes share the same identifier.
    DuplicatePid(Pid),

    /// A process asks for no CPU time at all.
    ZeroBurst(Pid),

    /// Round Robin was asked to use a time quantum of 0.
    ZeroQuantum,

    /// The latest arrival plus all the burst times does not fit in a `usize`.
    TimeOverflow,

    /// Processes are left unfinished but none of them can ever arrive.
    Stalled {
        /// The simulated time when the simulation got stuck.
        clock: usize,

        /// How many processes were left unfinished.
        pending: usize,
    },
}

impl Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::EmptyPid => write!(f, "process id must not be empty"),
            SimulationError::DuplicatePid(pid) => {
                write!(f, "process id \"{}\" is used more than once", pid)
            }
            SimulationError::ZeroBurst(pid) => {
                write!(f, "process \"{}\" must have a burst time greater than zero", pid)
            }
            SimulationError::ZeroQuantum => {
                write!(f, "time quantum must be greater than zero")
            }
            SimulationError::TimeOverflow => {
                write!(f, "arrival and burst times are too large to simulate")
            }
            SimulationError::Stalled { clock, pending } => {
                write!(
                    f,
                    "simulation stalled at time {} with {} unfinished processes",
                    clock, pending
                )
            }
        }
    }
}

impl Error for SimulationError {}

/// The trait that every scheduling policy implements.
pub trait Scheduler: Send + Sync {
    /// The name shown in reports.
    fn name(&self) -> &'static str;

    /// Runs the whole batch and returns the timeline and statistics.
    ///
    /// `processes` is only read, each call works on a private copy.
    fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, SimulationError>;
}
