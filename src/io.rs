//! Text input and output.
//!
//! Input is a stream of whitespace-separated integers: the number of cases,
//! then for every case the number of jobs followed by one `arrival service`
//! pair per job. Output is three `turnaround response` lines per case, for
//! FCFS, SJF and RR in that order.

use std::io::Write;
use std::str::{FromStr, SplitAsciiWhitespace};

use thiserror::Error;

use crate::{core::Ticks, sim::CaseReport, sim::Job};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unexpected end of input, expected {expected}")]
    MissingToken { expected: &'static str },
    #[error("invalid {expected} {token:?}")]
    InvalidNumber {
        token: String,
        expected: &'static str,
    },
}

struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_ascii_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self
            .inner
            .next()
            .ok_or(InputError::MissingToken { expected })?;

        token.parse().map_err(|_| InputError::InvalidNumber {
            token: token.to_string(),
            expected,
        })
    }
}

/// Parses every case of the input.
pub fn parse_cases(input: &str) -> Result<Vec<Vec<Job>>, InputError> {
    let mut tokens = Tokens::new(input);
    let case_cnt: usize = tokens.next("case count")?;

    (0..case_cnt)
        .map(|_| -> Result<Vec<Job>, InputError> {
            let job_cnt: usize = tokens.next("job count")?;
            (0..job_cnt)
                .map(|_| -> Result<Job, InputError> {
                    let arrival: Ticks = tokens.next("arrival time")?;
                    let service: Ticks = tokens.next("service time")?;
                    Ok(Job::new(arrival, service))
                })
                .collect()
        })
        .collect()
}

pub fn write_report<W: Write>(out: &mut W, report: &CaseReport) -> std::io::Result<()> {
    write!(out, "{report}")
}

/// Writes cases back in the input format.
pub fn write_cases<W: Write>(out: &mut W, cases: &[Vec<Job>]) -> std::io::Result<()> {
    writeln!(out, "{}", cases.len())?;
    for jobs in cases {
        writeln!(out, "{}", jobs.len())?;
        for job in jobs {
            writeln!(out, "{} {}", job.arrival, job.service)?;
        }
    }
    Ok(())
}
