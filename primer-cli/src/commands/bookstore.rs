//! Bookstore report: units, revenue and average price per book
//!
//! Transactions for each ISBN are expected to be grouped together. A line
//! is printed as soon as the ISBN changes and once more at end of input.

use super::input_failure;
use crate::Outcome;
use primer_core::{
    config::InputConfig, Accumulator, Report, Result, SalesRecord, TokenReader,
};
use std::io::{BufRead, Write};
use tracing::info;

/// Run the bookstore report
///
/// Malformed input still flushes the group in progress before the
/// diagnostic is written.
pub fn run<R: BufRead>(
    input: &mut TokenReader<R>,
    out: &mut impl Write,
    err: &mut impl Write,
    report: &Report,
    config: &InputConfig,
) -> Result<Outcome> {
    let mut acc = Accumulator::with_config(config);
    let fed = feed(input, &mut acc, out, report);

    if let Some(last) = acc.finish() {
        report.write_record(out, &last)?;
    }

    match fed {
        Ok(0) => {
            writeln!(err, "No data?!")?;
            Ok(Outcome::Failure)
        }
        Ok(transactions) => {
            info!(
                transactions,
                groups = acc.groups_flushed(),
                "bookstore report complete"
            );
            Ok(Outcome::Success)
        }
        Err(e) => input_failure(err, e),
    }
}

/// Push every transaction through the accumulator, printing flushed totals
fn feed<R: BufRead>(
    input: &mut TokenReader<R>,
    acc: &mut Accumulator,
    out: &mut impl Write,
    report: &Report,
) -> Result<usize> {
    let mut transactions = 0;
    while let Some(record) = SalesRecord::read(input)? {
        transactions += 1;
        if let Some(total) = acc.push(record)? {
            report.write_record(out, &total)?;
        }
    }
    Ok(transactions)
}
