use std::{
    fs,
    io::{self, BufWriter, Read, Write},
};

use anyhow::{Context, Result};
use clap::Parser;
use sched_calc::{
    Scheduler, Sim,
    cli::{Cli, Command},
    io::{parse_cases, write_cases, write_report},
    scheduler::{FcfsScheduler, RoundRobinScheduler, SjfScheduler},
    sim::bernoulli_jobs,
};

fn main() -> Result<()> {
    let opts = Cli::parse();
    env_logger::Builder::new()
        .filter_level(opts.log_level())
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &opts.command {
        Some(Command::Generate {
            cases,
            ticks,
            p_arrival,
            p_short,
            short_ticks,
            long_ticks,
            seed,
        }) => {
            // One seed per case so cases differ but stay reproducible
            let cases: Vec<_> = (0..*cases as u64)
                .map(|i| {
                    bernoulli_jobs(
                        *ticks,
                        *p_arrival,
                        *p_short,
                        *short_ticks,
                        *long_ticks,
                        seed.wrapping_add(i),
                    )
                })
                .collect();
            write_cases(&mut out, &cases)?;
        }
        None => solve(&opts, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

fn solve<W: Write>(opts: &Cli, out: &mut W) -> Result<()> {
    let input = match &opts.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let cases = parse_cases(&input).context("malformed input")?;
    log::debug!("{} cases, quantum {}", cases.len(), opts.quantum);

    for jobs in cases {
        let sim = Sim::new(jobs, opts.sim_config());
        write_report(out, &sim.report())?;

        if opts.stats {
            write_stats::<FcfsScheduler, _>(out, &sim)?;
            write_stats::<SjfScheduler, _>(out, &sim)?;
            write_stats::<RoundRobinScheduler, _>(out, &sim)?;
        }
    }

    Ok(())
}

fn write_stats<S: Scheduler, W: Write>(out: &mut W, sim: &Sim) -> io::Result<()> {
    let stats = sim.job_stats::<S>();
    writeln!(
        out,
        "# {} avg_turnaround={:.2} avg_response={:.2} max_turnaround={}",
        S::NAME,
        stats.mean_turnaround,
        stats.mean_response,
        stats.max_turnaround
    )
}
