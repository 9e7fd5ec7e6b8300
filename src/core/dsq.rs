//! Waiting structures the schedulers pick their next job from.

use keyed_priority_queue::KeyedPriorityQueue;
use std::{cmp::Ordering, collections::VecDeque};

use super::state::{JobId, Ticks};
use crate::sim::Job;

/// Ordering key of a waiting job: shortest service first, then earliest
/// arrival, then lowest index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestFirst {
    pub service: Ticks,
    pub arrival: Ticks,
    pub job: JobId,
}

impl ShortestFirst {
    fn key(&self) -> (Ticks, Ticks, JobId) {
        (self.service, self.arrival, self.job)
    }
}

// KeyedPriorityQueue is a max-heap, so the shortest job must compare greatest
impl PartialOrd for ShortestFirst {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShortestFirst {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Arrived jobs waiting for their (single) dispatch, extracted by
/// [`ShortestFirst`] order.
#[derive(Debug)]
pub struct WaitSet {
    jobs: KeyedPriorityQueue<JobId, ShortestFirst>,
}

impl WaitSet {
    pub fn new() -> Self {
        Self {
            jobs: KeyedPriorityQueue::new(),
        }
    }

    pub fn insert(&mut self, id: JobId, job: &Job) {
        let previous = self.jobs.push(
            id,
            ShortestFirst {
                service: job.service,
                arrival: job.arrival,
                job: id,
            },
        );
        debug_assert!(previous.is_none(), "Job {id} already waiting");
    }

    pub fn pop_shortest(&mut self) -> Option<JobId> {
        self.jobs.pop().map(|(id, _)| id)
    }

    pub fn peek_shortest(&self) -> Option<JobId> {
        self.jobs.peek().map(|(id, _)| *id)
    }

    pub fn contains(&self, id: JobId) -> bool {
        self.jobs.iter().any(|(waiting, _)| *waiting == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    pub job: JobId,
    /// CPU time received over all slices so far.
    pub run_time: Ticks,
}

impl QueueEntry {
    pub fn first_dispatch(&self) -> bool {
        self.run_time == 0
    }
}

/// FIFO of arrived, unfinished jobs awaiting their next slice.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    entries: VecDeque<QueueEntry>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, job: JobId) {
        debug_assert!(!self.contains(job), "Job {job} already queued");
        self.entries.push_back(QueueEntry { job, run_time: 0 });
    }

    pub fn front(&self) -> Option<&QueueEntry> {
        self.entries.front()
    }

    pub fn front_mut(&mut self) -> Option<&mut QueueEntry> {
        self.entries.front_mut()
    }

    pub fn pop_front(&mut self) -> Option<QueueEntry> {
        self.entries.pop_front()
    }

    // Head goes to the tail, everything else moves up by one
    pub fn rotate(&mut self) {
        if !self.entries.is_empty() {
            self.entries.rotate_left(1);
        }
    }

    pub fn contains(&self, job: JobId) -> bool {
        self.entries.iter().any(|entry| entry.job == job)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.iter()
    }
}
