//! Runs verification, then times the baseline and each strategy.

use std::io::Write;

use log::{debug, warn};
use rand::Rng;

use crate::bench::time_counter;
use crate::counter::{BitCounter, ClearLowestBit, LookupTable, Naive, NoOp};
use crate::error::Error;
use crate::verify::verify;

/// Verify all strategies, then print timings to `out`.
///
/// Mismatch diagnostics go to `err`. Timing always runs, even after a failed
/// verification or a failed diagnostic write; only failures writing to `out`
/// are returned. The overhead is printed on its own line and never
/// subtracted from the strategy timings.
pub fn run<O, E, R>(out: &mut O, err: &mut E, iterations: u32, rng: &mut R) -> Result<(), Error>
where
    O: Write,
    E: Write,
    R: Rng,
{
    let lookup = LookupTable::new();
    let strategies: [(&dyn BitCounter, &str); 3] = [
        (&Naive, "Naive method:       "),
        (&ClearLowestBit, "Fast method:        "),
        (&lookup, "Lookup table method:"),
    ];

    for (counter, _) in strategies {
        if let Err(e) = verify(counter, err) {
            warn!("diagnostics for {} lost: {}", counter.name(), e);
        }
    }
    if let Err(e) = err.flush() {
        warn!("failed to flush diagnostics: {}", e);
    }

    writeln!(out, "Testing bit counting methods over {} iterations...", iterations)?;
    debug!("timing overhead baseline");
    writeln!(out, "(Test overhead is ~{} msecs)", time_counter(&NoOp, iterations, rng))?;
    for (counter, label) in strategies {
        writeln!(out, "{} {} msecs", label, time_counter(counter, iterations, rng))?;
    }
    out.flush()?;
    Ok(())
}
