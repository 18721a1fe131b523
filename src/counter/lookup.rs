//! Byte-wise table counting.

use super::BitCounter;

/// Build the per-byte population count table.
///
/// Uses the recurrence `table[i] = (i & 1) + table[i / 2]`, so each entry
/// only depends on an entry that has already been filled.
const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 1;
    while i < 256 {
        table[i] = (i & 1) as u8 + table[i / 2];
        i += 1;
    }
    table
}

/// Precomputed population count for every byte value.
///
/// `BITS_SET_TABLE[b]` = popcount(b) for b in 0..256. Evaluated at compile
/// time, read-only for the whole process.
pub static BITS_SET_TABLE: [u8; 256] = build_table();

/// Sums four table lookups, one per byte of the input.
///
/// Bytes are extracted with shifts and masks, so the result does not depend
/// on host byte order.
///
/// # Performance
/// O(1) - 4 lookups and 3 additions for any input
#[derive(Debug, Clone, Copy)]
pub struct LookupTable {
    table: &'static [u8; 256],
}

impl LookupTable {
    /// Counter backed by [`BITS_SET_TABLE`].
    pub const fn new() -> Self {
        Self {
            table: &BITS_SET_TABLE,
        }
    }

    #[inline]
    fn byte_count(&self, n: u32, shift: u32) -> u32 {
        self.table[((n >> shift) & 0xFF) as usize] as u32
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BitCounter for LookupTable {
    #[inline]
    fn count_set_bits(&self, n: u32) -> u32 {
        self.byte_count(n, 0) + self.byte_count(n, 8) + self.byte_count(n, 16) + self.byte_count(n, 24)
    }

    fn name(&self) -> &'static str {
        "Lookup table method"
    }
}
