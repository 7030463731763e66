//! Per-ISBN running totals
//!
//! # Algorithm
//!
//! Transactions arrive grouped by ISBN. The accumulator keeps one running
//! total; a transaction for the same ISBN is merged into it, a transaction
//! for a different ISBN flushes it and starts a new one. The last group is
//! flushed by [`Accumulator::finish`].
//!
//! ```text
//! B1 2 10.00   -> total B1 2 20.00
//! B1 3 10.00   -> total B1 5 50.00
//! B2 1 10.00   -> flush B1 5 50.00, total B2 1 10.00
//! <eof>        -> flush B2 1 10.00
//! ```
//!
//! An ISBN that shows up again after its group was flushed means the input
//! was not grouped. That is logged, or rejected when configured.

use crate::{
    config::InputConfig,
    types::{Isbn, SalesRecord},
    Error, Result,
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Running total over a stream of grouped transactions
#[derive(Debug, Default)]
pub struct Accumulator {
    /// Total for the group in progress
    total: Option<SalesRecord>,

    /// ISBNs whose groups were already flushed
    flushed: HashSet<Isbn>,

    /// Fail instead of warning when a flushed ISBN comes back
    reject_regrouped: bool,
}

impl Accumulator {
    /// Create an accumulator that warns on ungrouped input
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator from input settings
    pub fn with_config(config: &InputConfig) -> Self {
        Self::new().reject_regrouped(config.reject_regrouped)
    }

    /// Choose whether a reappearing ISBN is an error
    pub fn reject_regrouped(mut self, reject: bool) -> Self {
        self.reject_regrouped = reject;
        self
    }

    /// Feed one transaction; returns the finished total when the ISBN changes
    pub fn push(&mut self, record: SalesRecord) -> Result<Option<SalesRecord>> {
        if let Some(total) = &mut self.total {
            if total.isbn == record.isbn {
                total.combine(&record)?;
                return Ok(None);
            }
        }

        self.check_grouped(&record.isbn)?;
        let finished = self.total.replace(record);
        if let Some(done) = &finished {
            self.mark_flushed(done);
        }
        Ok(finished)
    }

    /// Flush the group in progress
    pub fn finish(&mut self) -> Option<SalesRecord> {
        let finished = self.total.take();
        if let Some(done) = &finished {
            self.mark_flushed(done);
        }
        finished
    }

    /// Number of groups flushed so far
    pub fn groups_flushed(&self) -> usize {
        self.flushed.len()
    }

    fn check_grouped(&self, isbn: &Isbn) -> Result<()> {
        if !self.flushed.contains(isbn) {
            return Ok(());
        }

        if self.reject_regrouped {
            return Err(Error::Ungrouped(isbn.to_string()));
        }

        warn!(isbn = %isbn, "transactions for this ISBN are not grouped together");
        Ok(())
    }

    fn mark_flushed(&mut self, record: &SalesRecord) {
        debug!(
            isbn = %record.isbn,
            units = record.units,
            revenue = %record.revenue,
            "flushed group total"
        );
        self.flushed.insert(record.isbn.clone());
    }
}

/// Collapse a stream of grouped transactions into one total per group
pub fn totals(records: impl IntoIterator<Item = SalesRecord>) -> Result<Vec<SalesRecord>> {
    let mut acc = Accumulator::new();
    let mut out = Vec::new();

    for record in records {
        out.extend(acc.push(record)?);
    }
    out.extend(acc.finish());

    Ok(out)
}
