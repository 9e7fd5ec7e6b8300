use rand::prelude::*;

use super::job::Job;
use crate::core::Ticks;

/// Random workload over `ticks` time steps: at each step a job arrives with
/// probability `p_arrival`, and it needs `short_ticks` with probability
/// `p_short`, `long_ticks` otherwise.
///
/// Arrivals come out sorted. The same seed always yields the same jobs.
pub fn bernoulli_jobs(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_ticks: Ticks,
    long_ticks: Ticks,
    seed: u64,
) -> Vec<Job> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let service = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };

            jobs.push(Job::new(t, service));
        }
    }

    jobs
}
