//! Primer CLI
//!
//! Command runners behind the `primer` binary. Each command reads from a
//! [`TokenReader`](primer_core::TokenReader), writes results to `out` and
//! diagnostics to `err`, and reports an [`Outcome`].

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

pub mod commands;
pub mod logging;

use std::process::ExitCode;

/// Exit status for rejected input (`-1` as an unsigned byte)
pub const FAILURE_STATUS: u8 = 255;

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input was processed
    Success,
    /// Input was missing or malformed; a diagnostic was written
    Failure,
}

impl Outcome {
    /// Process exit code for this outcome
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::from(FAILURE_STATUS),
        }
    }
}
