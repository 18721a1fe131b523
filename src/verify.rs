//! Correctness check against the fixed test table.

use std::io::Write;

use log::{debug, warn};

use crate::constants::TEST_CASES;
use crate::counter::BitCounter;
use crate::error::{Error, Mismatch};

/// Run `counter` over every test case and collect disagreements.
///
/// # Returns
/// One [`Mismatch`] per failing case, in table order (empty when correct)
pub fn check<C: BitCounter + ?Sized>(counter: &C) -> Vec<Mismatch> {
    TEST_CASES
        .iter()
        .filter_map(|case| {
            let actual = counter.count_set_bits(case.input);
            (actual != case.expected).then(|| Mismatch {
                name: counter.name(),
                input: case.input,
                expected: case.expected,
                actual,
            })
        })
        .collect()
}

/// Check `counter` and write one diagnostic line per mismatch to `sink`.
///
/// Verification is advisory: every case is checked and nothing is escalated.
/// Only a failure to write the diagnostics is returned as an error.
///
/// # Returns
/// Number of mismatches reported
pub fn verify<C, W>(counter: &C, sink: &mut W) -> Result<usize, Error>
where
    C: BitCounter + ?Sized,
    W: Write,
{
    debug!("verifying {}", counter.name());
    let mismatches = check(counter);
    for mismatch in &mismatches {
        writeln!(sink, "{}", mismatch)?;
    }
    if !mismatches.is_empty() {
        warn!("{} failed {} of {} test cases", counter.name(), mismatches.len(), TEST_CASES.len());
    }
    Ok(mismatches.len())
}
