//! Shift-and-test counting.

use super::BitCounter;

/// Tests the least significant bit, then shifts right until nothing is left.
///
/// # Performance
/// O(position of highest set bit) - up to 32 iterations
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl BitCounter for Naive {
    #[inline]
    fn count_set_bits(&self, mut n: u32) -> u32 {
        let mut count = 0;
        while n != 0 {
            count += n & 1;
            n >>= 1;
        }
        count
    }

    fn name(&self) -> &'static str {
        "Naive method"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bits() {
        for shift in 0..32 {
            assert_eq!(Naive.count_set_bits(1u32 << shift), 1);
        }
    }

    #[test]
    fn test_shift_recurrence() {
        // count(n) == count(n >> 1) + (n & 1)
        for n in (0..=u32::MAX).step_by(7_919) {
            assert_eq!(Naive.count_set_bits(n), Naive.count_set_bits(n >> 1) + (n & 1));
        }
        let top = u32::MAX;
        assert_eq!(Naive.count_set_bits(top), Naive.count_set_bits(top >> 1) + 1);
    }
}
