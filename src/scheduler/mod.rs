pub mod fcfs;
pub mod rr;
pub mod sjf;

use crate::core::{
    Ticks,
    state::{JobId, SimCtx},
};
pub use fcfs::FcfsScheduler;
pub use rr::RoundRobinScheduler;
pub use sjf::SjfScheduler;

/// Default Round-Robin time slice.
pub const RR_QUANTUM: Ticks = 4;

#[derive(Debug, PartialEq, Eq)]
pub enum DispatchError {
    NoRunnableJob,
}

/// A uniprocessor scheduling policy.
///
/// The driver hands every arrived job to `enqueue` exactly once, in arrival
/// order, and then calls `dispatch` until it reports that nothing is
/// runnable. A dispatch must move the clock forward through
/// [`SimCtx::run_job`] and charge response and turnaround through the
/// context.
pub trait Scheduler {
    const NAME: &'static str;

    fn init(ctx: &mut SimCtx) -> Self;

    fn enqueue(&mut self, ctx: &mut SimCtx, job: JobId);

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Result<(), DispatchError>;

    // True while some arrived job still needs CPU time
    fn has_waiting(&self) -> bool;
}
