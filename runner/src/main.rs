use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, warn};

use processor::{format_reports, Processor};
use scheduler::{parse_process_table, Policy, Process};

mod logger;

/// Which policies to simulate.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum PolicyChoice {
    /// First-Come-First-Served
    Fcfs,
    /// Shortest-Job-First (non-preemptive)
    Sjf,
    /// Shortest-Remaining-Time-First
    Srtf,
    /// Priority (non-preemptive, lower value first)
    Priority,
    /// Round Robin
    Rr,
    /// Run all policies for comparison
    All,
}

impl PolicyChoice {
    fn policies(self, quantum: usize) -> Vec<Policy> {
        match self {
            PolicyChoice::Fcfs => vec![Policy::Fcfs],
            PolicyChoice::Sjf => vec![Policy::Sjf],
            PolicyChoice::Srtf => vec![Policy::Srtf],
            PolicyChoice::Priority => vec![Policy::Priority],
            PolicyChoice::Rr => vec![Policy::RoundRobin(quantum)],
            PolicyChoice::All => Policy::all(quantum).to_vec(),
        }
    }
}

/// Compare CPU scheduling policies on a batch of processes
#[derive(Parser, Debug)]
#[command(name = "schedsim")]
#[command(about = "Simulate CPU scheduling policies on a batch of processes", long_about = None)]
struct Args {
    /// Process records as `pid,arrival,burst,priority`
    #[arg(value_name = "PROCESS")]
    processes: Vec<Process>,

    /// Process table file, one record per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Scheduling policy to simulate
    #[arg(short, long, value_enum, default_value_t = PolicyChoice::All)]
    policy: PolicyChoice,

    /// Round Robin time quantum
    #[arg(short, long, default_value_t = 2)]
    quantum: usize,

    /// Log every scheduling decision
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn load_processes(args: &Args) -> Result<Vec<Process>> {
    let mut processes = args.processes.clone();
    if let Some(path) = &args.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read process table {}", path.display()))?;
        let table = parse_process_table(&text)
            .with_context(|| format!("invalid process table {}", path.display()))?;
        processes.extend(table);
    }
    Ok(processes)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.verbose).context("cannot install logger")?;

    let processes = load_processes(&args)?;
    if processes.is_empty() {
        warn!("no processes given, every report will be empty");
    }
    debug!("simulating {} processes", processes.len());

    let reports = Processor::new(args.policy.policies(args.quantum)).run(&processes);
    print!("{}", format_reports(&reports));

    Ok(())
}

// Do not delete this line
#[cfg(test)]
mod tests;
