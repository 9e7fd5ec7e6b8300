use std::ops::Range;

use super::{DispatchError, JobId, Scheduler, SimCtx};

/// First-Come-First-Served.
///
/// Jobs run to completion in list order. Arrived-but-unstarted jobs always
/// form a contiguous run of indices, so no queue is kept.
pub struct FcfsScheduler {
    pending: Range<JobId>,
}

impl Scheduler for FcfsScheduler {
    const NAME: &'static str = "FCFS";

    fn init(_ctx: &mut SimCtx) -> Self {
        Self { pending: 0..0 }
    }

    fn enqueue(&mut self, _ctx: &mut SimCtx, job: JobId) {
        debug_assert_eq!(job, self.pending.end, "FCFS jobs must arrive in list order");
        self.pending.end = job + 1;
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Result<(), DispatchError> {
        let job = self.pending.next().ok_or(DispatchError::NoRunnableJob)?;
        let service = ctx.job(job).service;

        ctx.mark_first_dispatch(job);
        ctx.run_job(job, service);
        ctx.mark_completed(job);
        Ok(())
    }

    fn has_waiting(&self) -> bool {
        !self.pending.is_empty()
    }
}
