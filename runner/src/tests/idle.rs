use function_name::named;

use super::{batch, processor, run};

#[test]
#[named]
pub fn late_first_arrival() {
    let reports = processor().run(&batch(
        "A 3 2 1
        B 4 1 2",
    ));

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &reports,
    );
}

#[test]
#[named]
pub fn gaps_between_jobs() {
    let reports = processor().run(&batch(
        "A 0 2 1
        B 5 3 1
        C 12 1 1",
    ));

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &reports,
    );
}
