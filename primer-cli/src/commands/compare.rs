//! Compare two input lines

use crate::Outcome;
use primer_core::{compare::compare_lines, Result, TokenReader};
use std::io::{BufRead, Write};

/// Read two lines and print how they order
///
/// A missing line compares as the empty string.
pub fn run<R: BufRead>(input: &mut TokenReader<R>, out: &mut impl Write) -> Result<Outcome> {
    let first = input.read_line()?.unwrap_or_default();
    let second = input.read_line()?.unwrap_or_default();

    for message in compare_lines(&first, &second).messages() {
        writeln!(out, "{}", message)?;
    }
    Ok(Outcome::Success)
}
