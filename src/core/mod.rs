pub mod driver;
pub mod dsq;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::SchedCore;
pub use dsq::{QueueEntry, ReadyQueue, ShortestFirst, WaitSet};
pub use event::SchedEvent;
pub use observer::Observer;
pub use state::{JobId, Metrics, SimConfig, SimCtx, Ticks};
