//! Per-job statistics recovered from an event trace.

use average::{Estimate, Max, Mean};
use rustc_hash::FxHashMap;

use super::job::{Job, JobId};
use crate::core::{SchedEvent, Ticks};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JobStats {
    pub mean_turnaround: f64,
    pub mean_response: f64,
    pub max_turnaround: f64,
}

impl JobStats {
    pub fn from_events(jobs: &[Job], events: &[SchedEvent]) -> Self {
        if jobs.is_empty() {
            return Self::default();
        }

        let mut first_dispatch: FxHashMap<JobId, Ticks> = FxHashMap::default();
        let mut completion: FxHashMap<JobId, Ticks> = FxHashMap::default();
        for event in events {
            match *event {
                SchedEvent::Dispatched { job, at, .. } => {
                    first_dispatch.entry(job).or_insert(at);
                }
                SchedEvent::Completed { job, at } => {
                    completion.insert(job, at);
                }
                _ => {}
            }
        }

        let turnaround = |(id, at): (&JobId, &Ticks)| (at - jobs[*id].arrival) as f64;
        let response = |(id, at): (&JobId, &Ticks)| (at - jobs[*id].arrival) as f64;

        Self {
            mean_turnaround: completion.iter().map(turnaround).collect::<Mean>().estimate(),
            mean_response: first_dispatch.iter().map(response).collect::<Mean>().estimate(),
            max_turnaround: completion.iter().map(turnaround).collect::<Max>().max(),
        }
    }
}
