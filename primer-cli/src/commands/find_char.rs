//! Find a character in a string given on the command line

use crate::Outcome;
use primer_core::{search::find_char, Result, TokenReader};
use std::io::{BufRead, Write};

/// Prompt for a character and report where it occurs in `text`
pub fn run<R: BufRead>(
    text: &str,
    input: &mut TokenReader<R>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome> {
    writeln!(out, "Enter one character:")?;
    out.flush()?;

    let Some(c) = input.next_char()? else {
        writeln!(err, "Error: no character entered")?;
        return Ok(Outcome::Failure);
    };

    let found = find_char(text, c);
    match found.first {
        Some(pos) => writeln!(out, "First occurrence of {} is at position: {}", c, pos)?,
        None => writeln!(out, "{} not found in the string", c)?,
    }
    writeln!(out, "{} occurs {} times.", c, found.occurrences)?;

    Ok(Outcome::Success)
}
