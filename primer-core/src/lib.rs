//! Primer Core
//!
//! Building blocks for the primer exercises: a whitespace token reader,
//! the sales-transaction record, and the one-pass reducers that drive the
//! bookstore programs.
//!
//! # Reducers
//!
//! - **Runs**: count consecutive equal values, flushing on change
//! - **Accumulator**: merge transactions that share an ISBN, flushing the
//!   running total when the ISBN changes and once more at end of input
//!
//! # Invariants
//!
//! - Group totals: units and revenue of a group are the sums of its members
//! - Average price is only defined when units > 0
//! - Input is consumed in a single pass; only the group in progress and the
//!   set of already-flushed ISBNs are kept in memory

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod aggregate;
pub mod aliasing;
pub mod compare;
pub mod config;
pub mod counter;
pub mod error;
pub mod input;
pub mod report;
pub mod runs;
pub mod search;
pub mod types;

// Re-exports
pub use aggregate::{totals, Accumulator};
pub use config::Config;
pub use error::{Error, Result};
pub use input::TokenReader;
pub use report::{OutputFormat, Report};
pub use runs::{runs, RunCounter};
pub use types::{Isbn, SalesRecord};
