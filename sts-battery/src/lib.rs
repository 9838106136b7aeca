#![doc = include_str!("../README.md")]

use strum::{EnumIter, IntoStaticStr};

// internal usage only
pub(crate) mod internals;
#[cfg(test)]
mod unit_tests;

// public exports
pub mod battery;
pub mod bitstream;
pub mod tests;

// shared data structures

/// How many bits a byte has
const BYTE_SIZE: usize = 8;

/// The significance level used for all pass/fail decisions.
pub const ALPHA: f64 = 0.01;

/// The minimum input length for the full battery, in bits. This is the
/// smallest input the Universal Statistical test accepts.
pub const MIN_BITS: usize = 387_840;

/// The maximum input length for the full battery, in bits. This is a safety
/// cap against unbounded allocations.
pub const MAX_BITS: usize = 10_000_000;

/// List of all tests of the battery, in the order they are run and reported.
///
/// The string representation of each variant is the stable identifier used in
/// [TestReport](battery::TestReport) and by every serializing caller.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, EnumIter, IntoStaticStr, strum::Display)]
pub enum Test {
    #[strum(serialize = "frequency_monobit")]
    Frequency,
    #[strum(serialize = "block_frequency")]
    BlockFrequency,
    #[strum(serialize = "cumulative_sums")]
    CumulativeSums,
    #[strum(serialize = "runs")]
    Runs,
    #[strum(serialize = "longest_run")]
    LongestRun,
    #[strum(serialize = "binary_matrix_rank")]
    BinaryMatrixRank,
    #[strum(serialize = "discrete_fourier_transform")]
    DiscreteFourierTransform,
    #[strum(serialize = "non_overlapping_template")]
    NonOverlappingTemplate,
    #[strum(serialize = "overlapping_template")]
    OverlappingTemplate,
    #[strum(serialize = "universal_statistical")]
    UniversalStatistical,
    #[strum(serialize = "approximate_entropy")]
    ApproximateEntropy,
    #[strum(serialize = "random_excursions")]
    RandomExcursions,
    #[strum(serialize = "random_excursions_variant")]
    RandomExcursionsVariant,
    #[strum(serialize = "serial")]
    Serial,
    #[strum(serialize = "linear_complexity")]
    LinearComplexity,
}

impl Test {
    /// The stable ascii identifier of the test.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The arguments of the parameterized tests, prefilled with the battery
/// defaults from the NIST publication.
///
/// You can construct an instance, leaving all other arguments as the default,
/// like this:
/// ```
/// use sts_battery::TestArgs;
/// let args = TestArgs {
///     serial_block_length: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Copy, Clone, Debug)]
pub struct TestArgs {
    /// Block length M of the Block Frequency test.
    pub block_frequency_block_length: usize,
    /// Template length m of both template matching tests.
    pub template_length: usize,
    /// Block length m of the Approximate Entropy test.
    pub approximate_entropy_block_length: usize,
    /// Block length m of the Serial test.
    pub serial_block_length: usize,
    /// Block length M of the Linear Complexity test.
    pub linear_complexity_block_length: usize,
}

impl Default for TestArgs {
    fn default() -> Self {
        Self {
            block_frequency_block_length: 128,
            template_length: 9,
            approximate_entropy_block_length: 10,
            serial_block_length: 16,
            linear_complexity_block_length: 500,
        }
    }
}

/// The common test result type, as returned by all tests.
///
/// A degenerate input does not produce an error: the test rejects with a
/// p-value of 0.0 and leaves a comment explaining the rejection.
#[derive(Copy, Clone, Debug)]
pub struct TestResult {
    p_value: f64,
    comment: Option<&'static str>,
}

// private methods
impl TestResult {
    /// A new test result without comment.
    fn new(p_value: f64) -> Self {
        Self {
            p_value,
            comment: None,
        }
    }

    /// A preconditional rejection: p-value 0.0 plus an explanatory comment.
    fn rejected(comment: &'static str) -> Self {
        Self {
            p_value: 0.0,
            comment: Some(comment),
        }
    }
}

// public methods
impl TestResult {
    /// The p_value (result of the test)
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// To determine if the test passed, based on the given threshold:
    /// The test passes if the [p_value](Self::p_value) is greater or equal to
    /// the given threshold.
    pub fn passed(&self, threshold: f64) -> bool {
        self.p_value >= threshold
    }

    /// Some tests leave a comment about the outcome, in particular when a
    /// precondition on the input is not met.
    pub fn comment(&self) -> Option<&'static str> {
        self.comment
    }
}
