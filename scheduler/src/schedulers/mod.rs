//! The scheduling policies.
//!
//! Every policy lives in its own file and is exported here.
//! The non-preemptive policies that pick a job by a key (SJF, Priority)
//! share their control loop, see [`non_preemptive`].
//!
mod fcfs;
pub use fcfs::Fcfs;

mod non_preemptive;

mod sjf;
pub use sjf::Sjf;

mod srtf;
pub use srtf::Srtf;

mod priority;
pub use priority::PriorityScheduler;

mod round_robin;
pub use round_robin::RoundRobin;

#[cfg(test)]
pub(crate) mod checks;
