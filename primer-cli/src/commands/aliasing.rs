//! Print the aliasing walkthrough

use crate::Outcome;
use primer_core::{aliasing::aliasing_demo, Result};
use std::io::Write;

/// Write each line of the walkthrough
pub fn run(out: &mut impl Write) -> Result<Outcome> {
    for line in aliasing_demo() {
        writeln!(out, "{}", line)?;
    }
    Ok(Outcome::Success)
}
