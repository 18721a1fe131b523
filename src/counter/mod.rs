//! Population count strategies for 32-bit words.
//!
//! Every strategy implements [`BitCounter`], so the verifier and the timing
//! harness can take any of them by reference and treat them interchangeably.

mod baseline;
mod clear_lowest;
mod lookup;
mod naive;

// Re-export all strategies
pub use baseline::{Intrinsic, NoOp};
pub use clear_lowest::ClearLowestBit;
pub use lookup::{LookupTable, BITS_SET_TABLE};
pub use naive::Naive;

/// Capability shared by every bit counting strategy.
///
/// Implementations must be pure: the result depends only on `n`, and every
/// correct strategy returns the same value for the same input.
pub trait BitCounter {
    /// Count the bits set to 1 in `n`.
    ///
    /// # Returns
    /// Hamming weight of `n` (0-32)
    fn count_set_bits(&self, n: u32) -> u32;

    /// Human readable label used in diagnostics.
    fn name(&self) -> &'static str;
}

impl<T: BitCounter + ?Sized> BitCounter for &T {
    #[inline]
    fn count_set_bits(&self, n: u32) -> u32 {
        (**self).count_set_bits(n)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
