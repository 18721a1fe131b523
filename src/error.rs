//! Error types.

use std::io;

use thiserror::Error;

/// Failure while producing the report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// A counter disagreed with the test table.
///
/// Reported as a diagnostic only; it never stops verification or timing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name} failed test: input was {input}, expected result was {expected} bits set, actual result was {actual}!")]
pub struct Mismatch {
    pub name: &'static str,
    pub input: u32,
    pub expected: u32,
    pub actual: u32,
}
