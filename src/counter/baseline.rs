//! Reference and baseline counters.

use super::BitCounter;

/// Always returns 0.
///
/// Timed through the same loop as the real strategies to estimate the cost
/// of the loop, the random input and the call itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOp;

impl BitCounter for NoOp {
    #[inline]
    fn count_set_bits(&self, _n: u32) -> u32 {
        0
    }

    fn name(&self) -> &'static str {
        "Test overhead"
    }
}

/// Count set bits with the CPU instruction.
///
/// Uses POPCNT where the target supports it. Serves as the reference result
/// in tests and benches.
///
/// # Performance
/// O(1) - single CPU instruction (POPCNT)
#[derive(Debug, Clone, Copy, Default)]
pub struct Intrinsic;

impl BitCounter for Intrinsic {
    #[inline]
    fn count_set_bits(&self, n: u32) -> u32 {
        n.count_ones()
    }

    fn name(&self) -> &'static str {
        "Intrinsic popcount"
    }
}
