//! Count how many transactions occur for each ISBN

use super::input_failure;
use crate::Outcome;
use primer_core::{types::Isbn, Result, RunCounter, SalesRecord, TokenReader};
use std::io::{BufRead, Write};

/// Run the per-ISBN transaction count
pub fn run<R: BufRead>(
    input: &mut TokenReader<R>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Outcome> {
    let mut counter = RunCounter::new();
    let fed = feed(input, &mut counter, out);

    if let Some((isbn, count)) = counter.finish() {
        write_count(out, &isbn, count)?;
    }

    match fed {
        Ok(0) => {
            writeln!(
                err,
                "Error: enter transactions for the ISBNs to count.\n\
                 The records for each ISBN should be grouped together."
            )?;
            Ok(Outcome::Failure)
        }
        Ok(_) => Ok(Outcome::Success),
        Err(e) => input_failure(err, e),
    }
}

fn feed<R: BufRead>(
    input: &mut TokenReader<R>,
    counter: &mut RunCounter<Isbn>,
    out: &mut impl Write,
) -> Result<usize> {
    let mut transactions = 0;
    while let Some(record) = SalesRecord::read(input)? {
        transactions += 1;
        if let Some((isbn, count)) = counter.push(record.isbn) {
            write_count(out, &isbn, count)?;
        }
    }
    Ok(transactions)
}

fn write_count(out: &mut impl Write, isbn: &Isbn, count: usize) -> Result<()> {
    writeln!(out, "Transaction {} occurred {} times", isbn, count)?;
    Ok(())
}
