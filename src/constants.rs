//! Fixed parameters for verification and timing.

/// Number of counter calls per timed run.
///
/// Takes roughly a second per strategy on a Raspberry Pi 3.
pub const ITERATIONS: u32 = 10_000_000;

/// Input paired with its known population count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    pub input: u32,
    pub expected: u32,
}

impl TestCase {
    const fn new(input: u32, expected: u32) -> Self {
        Self { input, expected }
    }
}

/// Table every strategy is checked against before timing.
pub const TEST_CASES: [TestCase; 6] = [
    TestCase::new(0, 0),
    TestCase::new(1, 1),
    TestCase::new(2, 1),
    TestCase::new(3, 2),
    TestCase::new(!0, 32),
    TestCase::new(!0 - 1, 31),
];
