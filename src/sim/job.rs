use crate::core::state::Ticks;

// Index into the case's job list
pub type JobId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub arrival: Ticks,
    pub service: Ticks,
}

impl Job {
    pub fn new(arrival: Ticks, service: Ticks) -> Self {
        Self { arrival, service }
    }

    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival <= now
    }
}
