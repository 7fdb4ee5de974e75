use scheduler::{parse_process_table, Policy, Process};

use std::env;
use std::fs;

use processor::format_reports;
use processor::{Processor, Report};

mod idle;
mod invalid;
mod preemption;

fn write_logs(folder: &str, name: &str, logs: &str) {
    let quantum = arguments();
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(
        format!("../outputs/{folder}/{name}___{quantum}.log"),
        logs,
    )
    .unwrap();
}

fn read_logs(folder: &str, name: &str) -> String {
    let quantum = arguments();
    fs::read_to_string(format!("../outputs/{folder}/{name}___{quantum}.log")).unwrap()
}

fn run(folder: &str, name: &str, reports: &[Report]) {
    let output = format_reports(reports);

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(folder, name, &output);
    } else {
        let reference = read_logs(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

fn arguments() -> usize {
    env::var("QUANTUM")
        .unwrap_or("4".to_string())
        .parse::<usize>()
        .unwrap()
}

fn batch(table: &str) -> Vec<Process> {
    parse_process_table(table).unwrap()
}

fn processor() -> Processor {
    let quantum = arguments();

    println!("Quantum {quantum}");
    Processor::new(Policy::all(quantum))
}
