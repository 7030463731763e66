//! Count how many consecutive times each integer appears

use super::input_failure;
use crate::Outcome;
use primer_core::{Result, RunCounter, TokenReader};
use std::io::{BufRead, Write};

/// Run the consecutive-value count
///
/// Empty input prints nothing and succeeds.
pub fn run<R: BufRead>(
    input: &mut TokenReader<R>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome> {
    let mut counter = RunCounter::new();
    let fed = feed(input, &mut counter, out);

    if let Some((value, count)) = counter.finish() {
        write_run(out, value, count)?;
    }

    match fed {
        Ok(()) => Ok(Outcome::Success),
        Err(e) => input_failure(err, e),
    }
}

fn feed<R: BufRead>(
    input: &mut TokenReader<R>,
    counter: &mut RunCounter<i64>,
    out: &mut impl Write,
) -> Result<()> {
    while let Some(value) = input.next_parsed::<i64>("integer")? {
        if let Some((done, count)) = counter.push(value) {
            write_run(out, done, count)?;
        }
    }
    Ok(())
}

fn write_run(out: &mut impl Write, value: i64, count: usize) -> Result<()> {
    writeln!(out, "{} occurs {} times", value, count)?;
    Ok(())
}
