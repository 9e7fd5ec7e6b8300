//! Command line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use crate::{
    core::{SimConfig, Ticks},
    scheduler::RR_QUANTUM,
};

/// Computes total turnaround and response times of job batches under FCFS,
/// SJF and Round-Robin scheduling.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Read cases from this file instead of stdin.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Round-Robin time quantum.
    #[arg(short, long, default_value_t = RR_QUANTUM, value_parser = clap::value_parser!(u64).range(1..))]
    pub quantum: Ticks,

    /// Also print per-job averages for every scheduler.
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a random input file with Bernoulli arrivals.
    Generate {
        #[arg(long, default_value_t = 1)]
        cases: usize,
        /// Length of the arrival window.
        #[arg(long, default_value_t = 50)]
        ticks: Ticks,
        /// Probability that a job arrives at a given tick.
        #[arg(long, default_value_t = 0.3)]
        p_arrival: f64,
        /// Probability that an arriving job is short.
        #[arg(long, default_value_t = 0.3)]
        p_short: f64,
        #[arg(long, default_value_t = 2)]
        short_ticks: Ticks,
        #[arg(long, default_value_t = 6)]
        long_ticks: Ticks,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            quantum: self.quantum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["sched_calc"]);
        assert_eq!(cli.sim_config(), SimConfig::default());
        assert_eq!(cli.log_level(), LevelFilter::Warn);
        assert!(cli.input.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["sched_calc", "-q", "2", "-vv", "--stats", "-i", "cases.txt"]);
        assert_eq!(cli.sim_config().quantum, 2);
        assert_eq!(cli.log_level(), LevelFilter::Trace);
        assert!(cli.stats);
        assert_eq!(cli.input, Some(PathBuf::from("cases.txt")));
    }

    #[test]
    fn test_zero_quantum_rejected() {
        assert!(Cli::try_parse_from(["sched_calc", "--quantum", "0"]).is_err());
    }

    #[test]
    fn test_generate() {
        let cli = Cli::parse_from(["sched_calc", "generate", "--cases", "3", "--seed", "9"]);
        match cli.command {
            Some(Command::Generate { cases, seed, .. }) => {
                assert_eq!(cases, 3);
                assert_eq!(seed, 9);
            }
            None => panic!("expected generate subcommand"),
        }
    }
}
