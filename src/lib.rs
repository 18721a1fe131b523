//! # bitcount-bench
//!
//! Three ways to count the set bits of a `u32`, a table-driven correctness
//! check, and a coarse timing harness.
//!
//! ## Strategies
//! - Naive: shift and test the low bit, up to 32 iterations
//! - Clear lowest bit (Kernighan): one iteration per set bit
//! - Lookup table: four byte lookups, constant time
//!
//! ```
//! use bitcount_bench::counter::{BitCounter, ClearLowestBit, LookupTable, Naive};
//!
//! assert_eq!(Naive.count_set_bits(0b1011), 3);
//! assert_eq!(ClearLowestBit.count_set_bits(u32::MAX), 32);
//! assert_eq!(LookupTable::new().count_set_bits(0xFFFF_FFFE), 31);
//! ```

pub mod bench;
pub mod constants;
pub mod counter;
pub mod driver;
pub mod error;
pub mod verify;

pub use counter::BitCounter;
pub use error::{Error, Mismatch};
