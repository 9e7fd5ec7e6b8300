use super::{DispatchError, JobId, Scheduler, SimCtx};
use crate::core::WaitSet;

/// Non-preemptive Shortest-Job-First.
pub struct SjfScheduler {
    waiting: WaitSet,
}

impl Scheduler for SjfScheduler {
    const NAME: &'static str = "SJF";

    fn init(_ctx: &mut SimCtx) -> Self {
        Self {
            waiting: WaitSet::new(),
        }
    }

    fn enqueue(&mut self, ctx: &mut SimCtx, job: JobId) {
        self.waiting.insert(job, &ctx.job(job));
    }

    // Every job that arrived by now is already waiting, so the shortest one
    // is the shortest eligible job.
    fn dispatch(&mut self, ctx: &mut SimCtx) -> Result<(), DispatchError> {
        let job = self
            .waiting
            .pop_shortest()
            .ok_or(DispatchError::NoRunnableJob)?;
        let service = ctx.job(job).service;

        ctx.mark_first_dispatch(job);
        ctx.run_job(job, service);
        ctx.mark_completed(job);
        Ok(())
    }

    fn has_waiting(&self) -> bool {
        !self.waiting.is_empty()
    }
}
