use crate::core::{JobId, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    Arrived {
        job: JobId,
        at: Ticks,
    },
    // Nothing runnable between `from` and `to`
    Idle {
        from: Ticks,
        to: Ticks,
    },
    Dispatched {
        job: JobId,
        at: Ticks,
        slice: Ticks,
    },
    Preempted {
        job: JobId,
        at: Ticks,
    },
    Completed {
        job: JobId,
        at: Ticks,
    },
}
