use function_name::named;

use super::{batch, processor, run};

#[test]
#[named]
pub fn shorter_jobs_arrive() {
    let reports = processor().run(&batch(
        "P1 0 8 3
        P2 1 4 1
        P3 2 9 4
        P4 3 5 2",
    ));

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &reports,
    );
}

#[test]
#[named]
pub fn arrivals_at_quantum_end() {
    let reports = processor().run(&batch(
        "P1 0 4 2
        P2 0 3 1
        P3 2 5 3
        P4 6 2 1",
    ));

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &reports,
    );
}
