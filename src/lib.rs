//! Batch uniprocessor scheduling calculator.
//!
//! For each case (a list of jobs sorted by arrival time) the crate computes
//! the total turnaround time and the total response time under three
//! policies: First-Come-First-Served, non-preemptive Shortest-Job-First and
//! Round-Robin with a fixed quantum.
//!
//! - `core` holds the simulation state, the waiting structures and the
//!   driver loop shared by all policies.
//! - `scheduler` holds the policies, each implementing the `Scheduler` trait.
//! - `sim` runs a case under every policy and gathers the results.

pub mod cli;
pub mod core;
pub mod io;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Metrics, SchedEvent, SimConfig};
pub use scheduler::Scheduler;
pub use sim::{CaseReport, Job, Sim};
