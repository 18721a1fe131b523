//! Timing harness for bit counters.
//!
//! Timings are not reproducible across runs or machines. Compare a strategy
//! against the overhead baseline or against another strategy from the same
//! run; the absolute numbers mean little on their own.

use std::hint::black_box;
use std::time::Instant;

use log::debug;
use rand::Rng;

use crate::counter::BitCounter;

/// Time `iterations` calls of `counter` on fresh random inputs.
///
/// Drawing the input is part of the measured loop, exactly as for the
/// baseline, so subtracting the baseline leaves the counting cost.
///
/// # Arguments
/// * `counter` - Strategy to time
/// * `iterations` - Number of calls
/// * `rng` - Source of inputs
///
/// # Returns
/// Elapsed wall time in whole milliseconds (truncated, may be 0)
pub fn time_counter<C, R>(counter: &C, iterations: u32, rng: &mut R) -> u64
where
    C: BitCounter + ?Sized,
    R: Rng,
{
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(counter.count_set_bits(rng.random()));
    }
    let elapsed = start.elapsed().as_millis() as u64;
    debug!("{}: {} iterations in {} ms", counter.name(), iterations, elapsed);
    elapsed
}
