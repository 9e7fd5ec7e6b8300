use sched_calc::{
    Job, Metrics, SchedEvent, Sim, SimConfig,
    scheduler::{FcfsScheduler, RoundRobinScheduler, SjfScheduler},
};

fn metrics(total_turnaround: u64, total_response: u64) -> Metrics {
    Metrics {
        total_turnaround,
        total_response,
    }
}

fn sim(jobs: &[(u64, u64)]) -> Sim {
    sim_with_quantum(jobs, 4)
}

fn sim_with_quantum(jobs: &[(u64, u64)], quantum: u64) -> Sim {
    Sim::new(
        jobs.iter().map(|&(arrival, service)| Job::new(arrival, service)).collect(),
        SimConfig { quantum },
    )
}

fn dispatch_order(events: &[SchedEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|event| match event {
            SchedEvent::Dispatched { job, .. } => Some(*job),
            _ => None,
        })
        .collect()
}

#[test]
fn test_scenario_a() {
    let report = sim(&[(0, 5), (1, 3), (2, 1)]).report();

    assert_eq!(report.fcfs, metrics(19, 10));
    assert_eq!(report.sjf, metrics(17, 8));
    // job2 first runs at t=7, after job1's final slice
    assert_eq!(report.rr, metrics(21, 8));
}

#[test]
fn test_scenario_a_order() {
    let sim = sim(&[(0, 5), (1, 3), (2, 1)]);

    let (_, events) = sim.trace::<SjfScheduler>();
    assert_eq!(dispatch_order(&events), vec![0, 2, 1]);

    let (_, events) = sim.trace::<RoundRobinScheduler>();
    assert_eq!(dispatch_order(&events), vec![0, 1, 2, 0]);
    assert!(events.contains(&SchedEvent::Preempted { job: 0, at: 4 }));
}

#[test]
fn test_single_job() {
    for s in [1, 4, 9] {
        let report = sim(&[(0, s)]).report();
        for m in [report.fcfs, report.sjf, report.rr] {
            assert_eq!(m, metrics(s, 0));
        }
    }
}

#[test]
fn test_single_late_job() {
    let report = sim(&[(10, 3)]).report();
    for m in [report.fcfs, report.sjf, report.rr] {
        assert_eq!(m, metrics(3, 0));
    }
}

#[test]
fn test_idle_gap() {
    // CPU is idle over [2, 10)
    let sim = sim(&[(0, 2), (10, 6)]);
    let report = sim.report();

    assert_eq!(report.fcfs, metrics(8, 0));
    assert_eq!(report.sjf, metrics(8, 0));
    assert_eq!(report.rr, metrics(8, 0));

    let (_, events) = sim.trace::<FcfsScheduler>();
    assert!(events.contains(&SchedEvent::Idle { from: 2, to: 10 }));
}

#[test]
fn test_same_arrival() {
    let sim = sim(&[(0, 6), (0, 2), (0, 4)]);

    // FCFS: list order, starts at 0, 6, 8
    assert_eq!(sim.run::<FcfsScheduler>(), metrics(6 + 8 + 12, 14));

    // SJF: 2, 4, 6 starting at 0, 2, 6
    let (m, events) = sim.trace::<SjfScheduler>();
    assert_eq!(m, metrics(2 + 6 + 12, 8));
    assert_eq!(dispatch_order(&events), vec![1, 2, 0]);
}

#[test]
fn test_identical_jobs() {
    let report = sim(&[(1, 3), (1, 3), (1, 3)]).report();
    // Completions at 4, 7, 10
    assert_eq!(report.fcfs, metrics(3 + 6 + 9, 3 + 6));
    assert_eq!(report.sjf, report.fcfs);
    assert_eq!(report.rr, report.fcfs);
}

#[test]
fn test_sjf_waits_for_running_job() {
    // Job 1 is shorter but arrives while job 0 runs: no preemption
    let m = sim(&[(0, 10), (1, 1)]).run::<SjfScheduler>();
    assert_eq!(m, metrics(10 + 10, 9));
}

#[test]
fn test_sjf_ties_on_service_by_arrival() {
    let sim = sim(&[(0, 5), (1, 2), (3, 2)]);
    let (m, events) = sim.trace::<SjfScheduler>();
    assert_eq!(dispatch_order(&events), vec![0, 1, 2]);
    // starts 0, 5, 7 ; completions 5, 7, 9
    assert_eq!(m, metrics(5 + 6 + 6, 4 + 4));
}

#[test]
fn test_rr_arrival_at_completion_queues_first() {
    // Job 1 arrives exactly when job 0's first slice ends
    let sim = sim_with_quantum(&[(0, 6), (2, 2)], 2);
    let (m, events) = sim.trace::<RoundRobinScheduler>();

    // t0 job0, t2 job1 (done at 4), t4 job0, t6 job0 done at 8
    assert_eq!(dispatch_order(&events), vec![0, 1, 0, 0]);
    assert_eq!(m, metrics(8 + 2, 0));
}

#[test]
fn test_rr_response_counted_once() {
    let m = sim_with_quantum(&[(0, 10)], 3).run::<RoundRobinScheduler>();
    assert_eq!(m, metrics(10, 0));
}

#[test]
fn test_rr_large_quantum_matches_fcfs() {
    let sim = sim_with_quantum(&[(0, 3), (1, 7), (1, 2), (4, 5), (20, 1)], 7);
    assert_eq!(sim.run::<RoundRobinScheduler>(), sim.run::<FcfsScheduler>());
}

#[test]
fn test_rr_quantum_one() {
    let sim = sim_with_quantum(&[(0, 2), (0, 2)], 1);
    let (m, events) = sim.trace::<RoundRobinScheduler>();
    assert_eq!(dispatch_order(&events), vec![0, 1, 0, 1]);
    // completions 3 and 4, first dispatch at 0 and 1
    assert_eq!(m, metrics(7, 1));
}
