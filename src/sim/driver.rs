use std::fmt;

use super::{job::Job, stats::JobStats};
use crate::{
    core::{
        driver::SchedCore,
        event::SchedEvent,
        observer::Observer,
        state::{Metrics, SimConfig},
    },
    scheduler::{FcfsScheduler, RoundRobinScheduler, Scheduler, SjfScheduler},
};

/// The three results computed for one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseReport {
    pub fcfs: Metrics,
    pub sjf: Metrics,
    pub rr: Metrics,
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for metrics in [self.fcfs, self.sjf, self.rr] {
            writeln!(
                f,
                "{} {}",
                metrics.total_turnaround, metrics.total_response
            )?;
        }
        Ok(())
    }
}

/// One test case: a job list sorted by arrival, run under any scheduler.
///
/// Every run starts from a fresh context and waiting structure, so runs are
/// independent of each other and of their order.
pub struct Sim {
    jobs: Vec<Job>,
    config: SimConfig,
}

impl Sim {
    pub fn new(jobs: Vec<Job>, config: SimConfig) -> Self {
        // Not sorted here: the arrival order is part of the input
        if let Some(pos) = jobs.windows(2).position(|w| w[1].arrival < w[0].arrival) {
            log::warn!(
                "job {} arrives at {} before job {} at {}; results are unspecified",
                pos + 1,
                jobs[pos + 1].arrival,
                pos,
                jobs[pos].arrival
            );
        }

        Self { jobs, config }
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn run<S: Scheduler>(&self) -> Metrics {
        SchedCore::<S>::new(&self.jobs, self.config, Observer::new())
            .run()
            .0
    }

    pub fn trace<S: Scheduler>(&self) -> (Metrics, Vec<SchedEvent>) {
        let (metrics, observer) =
            SchedCore::<S>::new(&self.jobs, self.config, Observer::recording()).run();
        (metrics, observer.into_events())
    }

    pub fn report(&self) -> CaseReport {
        let report = CaseReport {
            fcfs: self.run::<FcfsScheduler>(),
            sjf: self.run::<SjfScheduler>(),
            rr: self.run::<RoundRobinScheduler>(),
        };
        log::debug!("{} jobs: {:?}", self.jobs.len(), report);
        report
    }

    pub fn job_stats<S: Scheduler>(&self) -> JobStats {
        let (_, events) = self.trace::<S>();
        JobStats::from_events(&self.jobs, &events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> Sim {
        Sim::new(
            vec![Job::new(0, 5), Job::new(1, 3), Job::new(2, 1)],
            SimConfig::default(),
        )
    }

    #[test]
    fn test_report_display() {
        let report = scenario_a().report();
        assert_eq!(report.to_string(), "19 10\n17 8\n21 8\n");
    }

    #[test]
    fn test_empty_case() {
        let sim = Sim::new(Vec::new(), SimConfig::default());
        let report = sim.report();
        assert_eq!(report.fcfs, Metrics::default());
        assert_eq!(report.sjf, Metrics::default());
        assert_eq!(report.rr, Metrics::default());
        assert_eq!(report.to_string(), "0 0\n0 0\n0 0\n");
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let sim = scenario_a();
        assert_eq!(sim.report(), sim.report());
        assert_eq!(sim.run::<SjfScheduler>(), sim.run::<SjfScheduler>());
    }

    #[test]
    fn test_trace_matches_run() {
        let sim = scenario_a();
        let (metrics, events) = sim.trace::<RoundRobinScheduler>();
        assert_eq!(metrics, sim.run::<RoundRobinScheduler>());

        let completions: Vec<_> = events
            .iter()
            .filter_map(|event| match event {
                SchedEvent::Completed { job, at } => Some((*job, *at)),
                _ => None,
            })
            .collect();
        assert_eq!(completions, vec![(1, 7), (2, 8), (0, 9)]);
    }
}
