use super::{
    observer::Observer,
    state::{Metrics, SimConfig, SimCtx},
};
use crate::{
    scheduler::{DispatchError, Scheduler},
    sim::Job,
};

pub struct SchedCore<'a, S: Scheduler> {
    pub ctx: SimCtx<'a>,
    pub scheduler: S,
}

impl<'a, S: Scheduler> SchedCore<'a, S> {
    pub fn new(jobs: &'a [Job], config: SimConfig, observer: Observer) -> Self {
        let mut ctx = SimCtx::new(jobs, config, observer);
        let scheduler = S::init(&mut ctx);
        Self { ctx, scheduler }
    }

    // Returns false once every job has arrived and nothing is left to run
    pub fn step(&mut self) -> bool {
        self.handle_arrivals();

        match self.scheduler.dispatch(&mut self.ctx) {
            Ok(()) => true,
            Err(DispatchError::NoRunnableJob) => match self.ctx.next_arrival() {
                // CPU idles until the next job shows up
                Some(arrival) => {
                    self.ctx.idle_until(arrival);
                    true
                }
                None => false,
            },
        }
    }

    fn handle_arrivals(&mut self) {
        for job in self.ctx.take_arrived() {
            self.scheduler.enqueue(&mut self.ctx, job);
        }
    }

    pub fn run(mut self) -> (Metrics, Observer) {
        while self.step() {}

        debug_assert!(self.ctx.all_arrived() && !self.scheduler.has_waiting());
        log::debug!(
            "{} finished at t={}: {:?}",
            S::NAME,
            self.ctx.now(),
            self.ctx.metrics()
        );
        self.ctx.into_parts()
    }
}
