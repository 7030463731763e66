//! One module per exercise

pub mod aliasing;
pub mod bookstore;
pub mod compare;
pub mod count_calls;
pub mod count_isbn;
pub mod find_char;
pub mod runs;
pub mod sum_pair;

use crate::Outcome;
use primer_core::{Error, Result};
use std::io::Write;

/// Turn an input error into a diagnostic and a failed outcome
///
/// Errors from the environment (IO, serialization) are passed through.
pub(crate) fn input_failure(err: &mut impl Write, error: Error) -> Result<Outcome> {
    if !error.is_input_error() {
        return Err(error);
    }

    tracing::debug!(error = %error, "rejecting input");
    writeln!(err, "Error: {}", error)?;
    Ok(Outcome::Failure)
}
