use std::ops::Range;

use super::{event::SchedEvent, observer::Observer};
use crate::{scheduler::RR_QUANTUM, sim::Job};

pub use crate::sim::JobId;
pub type Ticks = u64;

/// Running totals accumulated by one scheduler over one case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub total_turnaround: Ticks,
    pub total_response: Ticks,
}

/// Per-run parameters shared by all schedulers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Round-Robin time slice. Fixed for the whole run.
    pub quantum: Ticks,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: RR_QUANTUM,
        }
    }
}

/// State of a single scheduler run: the clock, the arrival cursor, and the
/// metrics charged so far.
///
/// The job list is borrowed read-only, so any number of runs can share it.
#[derive(Debug)]
pub struct SimCtx<'a> {
    pub config: SimConfig,
    now: Ticks,
    jobs: &'a [Job],
    // Every job before this index has been handed to the scheduler
    cursor: usize,
    metrics: Metrics,
    observer: Observer,
}

impl<'a> SimCtx<'a> {
    pub fn new(jobs: &'a [Job], config: SimConfig, observer: Observer) -> Self {
        Self {
            config,
            now: jobs.first().map_or(0, |job| job.arrival),
            jobs,
            cursor: 0,
            metrics: Metrics::default(),
            observer,
        }
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn job(&self, job: JobId) -> Job {
        self.jobs[job]
    }

    pub fn all_arrived(&self) -> bool {
        self.cursor == self.jobs.len()
    }

    pub fn next_arrival(&self) -> Option<Ticks> {
        self.jobs.get(self.cursor).map(|job| job.arrival)
    }

    /// Hands out every job that has arrived by now and was not handed out
    /// before. Relies on the job list being sorted by arrival.
    pub fn take_arrived(&mut self) -> Range<JobId> {
        let start = self.cursor;
        while self
            .jobs
            .get(self.cursor)
            .is_some_and(|job| job.has_arrived(self.now))
        {
            self.observer.observe(SchedEvent::Arrived {
                job: self.cursor,
                at: self.jobs[self.cursor].arrival,
            });
            self.cursor += 1;
        }

        start..self.cursor
    }

    pub fn idle_until(&mut self, until: Ticks) {
        if until <= self.now {
            return;
        }

        self.observer.observe(SchedEvent::Idle {
            from: self.now,
            to: until,
        });
        self.now = until;
    }

    pub fn mark_first_dispatch(&mut self, job: JobId) {
        let response = self.now - self.jobs[job].arrival;
        self.metrics.total_response += response;
        self.observer.charge_response(job);
    }

    pub fn run_job(&mut self, job: JobId, slice: Ticks) {
        self.observer.observe(SchedEvent::Dispatched {
            job,
            at: self.now,
            slice,
        });
        self.now = self.now.saturating_add(slice);
    }

    pub fn mark_preempted(&mut self, job: JobId) {
        self.observer
            .observe(SchedEvent::Preempted { job, at: self.now });
    }

    pub fn mark_completed(&mut self, job: JobId) {
        let turnaround = self.now - self.jobs[job].arrival;
        self.metrics.total_turnaround += turnaround;
        self.observer
            .observe(SchedEvent::Completed { job, at: self.now });
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn into_parts(self) -> (Metrics, Observer) {
        self.observer.finish(self.jobs.len());
        (self.metrics, self.observer)
    }
}
