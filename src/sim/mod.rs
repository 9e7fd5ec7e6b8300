pub mod driver;
pub mod job;
pub mod stats;
pub mod workload;

pub use driver::{CaseReport, Sim};
pub use job::{Job, JobId};
pub use stats::JobStats;
pub use workload::bernoulli_jobs;
