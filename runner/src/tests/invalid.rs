use function_name::named;
use scheduler::Process;

use super::{batch, processor, run};

#[test]
#[named]
pub fn duplicate_pid() {
    let reports = processor().run(&batch(
        "P1 0 2 1
        P1 1 1 1",
    ));

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &reports,
    );
}

#[test]
#[named]
pub fn zero_burst() {
    let reports = processor().run(&[Process::new("P1", 0, 0, 1)]);

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &reports,
    );
}
