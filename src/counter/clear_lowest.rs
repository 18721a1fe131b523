//! Kernighan's counting: clear the lowest set bit until the word is empty.

use super::BitCounter;

/// Repeatedly applies `n & (n - 1)`, one iteration per set bit.
///
/// # Performance
/// O(popcount) - never more iterations than [`Naive`](super::Naive)
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearLowestBit;

impl ClearLowestBit {
    /// Run the clearing loop and report how many iterations it took.
    ///
    /// The iteration count is the population count, so this doubles as the
    /// counting routine.
    #[inline]
    pub fn iterations(n: u32) -> u32 {
        let mut n = n;
        let mut steps = 0;
        while n != 0 {
            n &= n - 1;
            steps += 1;
        }
        steps
    }
}

impl BitCounter for ClearLowestBit {
    #[inline]
    fn count_set_bits(&self, n: u32) -> u32 {
        Self::iterations(n)
    }

    fn name(&self) -> &'static str {
        "\"Fast\" method"
    }
}
