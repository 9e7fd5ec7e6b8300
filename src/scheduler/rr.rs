use super::{DispatchError, JobId, Scheduler, SimCtx};
use crate::core::{ReadyQueue, Ticks};

/// Preemptive Round-Robin with a fixed quantum.
pub struct RoundRobinScheduler {
    ready: ReadyQueue,
    quantum: Ticks,
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "RR";

    fn init(ctx: &mut SimCtx) -> Self {
        debug_assert!(ctx.config.quantum > 0, "Round-Robin quantum must be positive");
        Self {
            ready: ReadyQueue::new(),
            quantum: ctx.config.quantum,
        }
    }

    fn enqueue(&mut self, _ctx: &mut SimCtx, job: JobId) {
        self.ready.push_back(job);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Result<(), DispatchError> {
        // In its own block so the head borrow ends before enqueueing arrivals
        let (job, slice, first, done) = {
            let head = self.ready.front_mut().ok_or(DispatchError::NoRunnableJob)?;
            let service = ctx.job(head.job).service;
            debug_assert!(head.run_time < service || service == 0);

            let slice = (service - head.run_time).min(self.quantum);
            let first = head.first_dispatch();
            head.run_time += slice;
            (head.job, slice, first, head.run_time == service)
        };

        if first {
            ctx.mark_first_dispatch(job);
        }
        ctx.run_job(job, slice);

        // Jobs arriving during the slice queue up ahead of the preempted head
        for arrived in ctx.take_arrived() {
            self.enqueue(ctx, arrived);
        }

        if done {
            self.ready.pop_front();
            ctx.mark_completed(job);
        } else {
            self.ready.rotate();
            ctx.mark_preempted(job);
        }
        Ok(())
    }

    fn has_waiting(&self) -> bool {
        !self.ready.is_empty()
    }
}
