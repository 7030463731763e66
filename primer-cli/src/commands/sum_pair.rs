//! Sum two transactions for the same ISBN

use super::input_failure;
use crate::Outcome;
use primer_core::{Report, Result, SalesRecord, TokenReader};
use std::io::{BufRead, Write};

/// Read two transactions and print their sum
pub fn run<R: BufRead>(
    input: &mut TokenReader<R>,
    out: &mut impl Write,
    err: &mut impl Write,
    report: &Report,
) -> Result<Outcome> {
    let pair = match read_pair(input) {
        Ok(pair) => pair,
        Err(e) => return input_failure(err, e),
    };

    let Some((mut first, second)) = pair else {
        writeln!(err, "Error: enter two transactions for the same ISBN")?;
        return Ok(Outcome::Failure);
    };

    if first.isbn != second.isbn {
        writeln!(err, "Data must refer to the same ISBN")?;
        return Ok(Outcome::Failure);
    }

    if let Err(e) = first.combine(&second) {
        return input_failure(err, e);
    }

    report.write_record(out, &first)?;
    Ok(Outcome::Success)
}

fn read_pair<R: BufRead>(
    input: &mut TokenReader<R>,
) -> Result<Option<(SalesRecord, SalesRecord)>> {
    let Some(first) = SalesRecord::read(input)? else {
        return Ok(None);
    };
    let Some(second) = SalesRecord::read(input)? else {
        return Ok(None);
    };
    Ok(Some((first, second)))
}
