use rustc_hash::FxHashSet;

use super::{event::SchedEvent, state::JobId};

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
    record: bool,
    events: Vec<SchedEvent>,
    arrived: FxHashSet<JobId>,
    responded: FxHashSet<JobId>,
    completed: FxHashSet<JobId>,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    // Keep every observed event, not only log it
    pub fn recording() -> Self {
        Self {
            record: true,
            ..Self::default()
        }
    }

    pub fn observe(&mut self, event: SchedEvent) {
        self.step += 1;
        log::trace!("step={} {:?}", self.step, event);

        match event {
            SchedEvent::Arrived { job, .. } => {
                let fresh = self.arrived.insert(job);
                debug_assert!(fresh, "Job {job} pulled in twice");
            }
            SchedEvent::Idle { from, to } => {
                debug_assert!(from < to, "Idle gap [{from}, {to}) must move the clock");
            }
            SchedEvent::Dispatched { job, .. } | SchedEvent::Preempted { job, .. } => {
                debug_assert!(
                    self.arrived.contains(&job),
                    "Job {job} scheduled before it arrived"
                );
                debug_assert!(
                    !self.completed.contains(&job),
                    "Job {job} scheduled after completion"
                );
            }
            SchedEvent::Completed { job, .. } => {
                debug_assert!(
                    self.responded.contains(&job),
                    "Job {job} completed without ever being dispatched"
                );
                let fresh = self.completed.insert(job);
                debug_assert!(fresh, "Job {job} completed twice");
            }
        }

        if self.record {
            self.events.push(event);
        }
    }

    // Response time is charged once, on the first dispatch
    pub fn charge_response(&mut self, job: JobId) {
        let fresh = self.responded.insert(job);
        debug_assert!(fresh, "Response of job {job} charged twice");
    }

    pub fn finish(&self, job_count: usize) {
        debug_assert_eq!(
            self.completed.len(),
            job_count,
            "Run ended with unfinished jobs"
        );
        debug_assert_eq!(
            self.responded.len(),
            job_count,
            "Run ended with jobs that never responded"
        );
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn events(&self) -> &[SchedEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SchedEvent> {
        self.events
    }
}
