//! Drive the call counter from user input

use super::input_failure;
use crate::Outcome;
use primer_core::{Result, TokenReader};
use std::io::{BufRead, Write};

/// Rounds prompted for when none are given
pub const DEFAULT_ROUNDS: u32 = 3;

/// Each round reads `n` and prints the next `n` counter values
///
/// A negative `n` stops with a failure. End of input stops early and is
/// not an error.
pub fn run<R: BufRead>(
    rounds: u32,
    mut next: impl FnMut() -> u64,
    input: &mut TokenReader<R>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome> {
    for _ in 0..rounds {
        writeln!(out, "Enter one integer:")?;
        out.flush()?;

        let n = match input.next_parsed::<i64>("integer") {
            Ok(Some(n)) => n,
            Ok(None) => break,
            Err(e) => return input_failure(err, e),
        };

        if n < 0 {
            writeln!(err, "Error: enter an integer of 0 or more")?;
            return Ok(Outcome::Failure);
        }

        writeln!(out, "You increased static integer {} times", n)?;
        for _ in 0..n {
            writeln!(out, "{}", next())?;
        }
    }

    Ok(Outcome::Success)
}
