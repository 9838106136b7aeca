//! The battery orchestrator: runs all fifteen tests in their fixed order and
//! assembles the named result list.

use crate::bitstream::Bitstream;
use crate::tests::*;
use crate::{Test, TestArgs, TestResult, ALPHA, MAX_BITS, MIN_BITS};
use strum::IntoEnumIterator;
use thiserror::Error;

/// The wire-contract record emitted per test.
///
/// A preconditional kernel rejection is reported as a normal record with
/// `p_value` 0.0, `passed` false and a non-empty [warning](Self::warning) -
/// callers must distinguish such a skipped test from a genuinely failing one
/// (`0 < p_value < alpha`, empty warning).
#[derive(Clone, Debug)]
pub struct TestReport {
    /// The stable ascii identifier of the test.
    pub name: &'static str,
    /// The p-value, in [0, 1]; 0.0 on rejection.
    pub p_value: f64,
    /// Whether `p_value >= alpha`.
    pub passed: bool,
    /// 1.0 when passed, 0.0 otherwise.
    pub proportion: f64,
    /// Explanation of a preconditional rejection; empty otherwise.
    pub warning: &'static str,
}

impl TestReport {
    fn from_result(test: Test, result: TestResult) -> Self {
        let passed = result.passed(ALPHA);
        Self {
            name: test.name(),
            p_value: result.p_value(),
            passed,
            proportion: if passed { 1.0 } else { 0.0 },
            warning: result.comment().unwrap_or(""),
        }
    }
}

/// The error type of [run_all_tests]: the input violates the bit-count
/// bounds. No results are produced in this case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatteryError {
    #[error("insufficient bits: got {got}, need at least {need}")]
    InsufficientBits { got: usize, need: usize },
    #[error("too many bits: got {got}, maximum {max}")]
    TooManyBits { got: usize, max: usize },
}

/// Runs the full battery with the default arguments.
///
/// The input must contain between [MIN_BITS] and [MAX_BITS] bits. On success,
/// exactly fifteen [TestReport]s are returned, in the fixed order of [Test].
/// A single test never fails the battery: degenerate inputs surface as
/// records with a warning.
pub fn run_all_tests(data: impl AsRef<Bitstream>) -> Result<Vec<TestReport>, BatteryError> {
    let data = data.as_ref();
    let num_bits = data.len_bit();

    if num_bits < MIN_BITS {
        return Err(BatteryError::InsufficientBits {
            got: num_bits,
            need: MIN_BITS,
        });
    }
    if num_bits > MAX_BITS {
        return Err(BatteryError::TooManyBits {
            got: num_bits,
            max: MAX_BITS,
        });
    }

    let args = TestArgs::default();
    Ok(Test::iter()
        .map(|test| run_test(test, data, &args))
        .collect())
}

/// Runs a single test with the given arguments and wraps its outcome into the
/// wire-contract record. No bit-count bounds are enforced here; the test
/// itself rejects degenerate inputs.
pub fn run_test(test: Test, data: &Bitstream, args: &TestArgs) -> TestReport {
    let result = match test {
        Test::Frequency => frequency::frequency_test(data),
        Test::BlockFrequency => {
            frequency_block::frequency_block_test(data, args.block_frequency_block_length)
        }
        Test::CumulativeSums => cumulative_sums::cumulative_sums_test(data),
        Test::Runs => runs::runs_test(data),
        Test::LongestRun => longest_run_of_ones::longest_run_of_ones_test(data),
        Test::BinaryMatrixRank => binary_matrix_rank::binary_matrix_rank_test(data),
        Test::DiscreteFourierTransform => spectral_dft::spectral_dft_test(data),
        Test::NonOverlappingTemplate => {
            template_matching::non_overlapping::non_overlapping_template_test(
                data,
                args.template_length,
            )
        }
        Test::OverlappingTemplate => template_matching::overlapping::overlapping_template_test(
            data,
            args.template_length,
        ),
        Test::UniversalStatistical => {
            maurers_universal_statistical::maurers_universal_statistical_test(data)
        }
        Test::ApproximateEntropy => approximate_entropy::approximate_entropy_test(
            data,
            args.approximate_entropy_block_length,
        ),
        Test::RandomExcursions => random_excursions::random_excursions_test(data),
        Test::RandomExcursionsVariant => {
            random_excursions_variant::random_excursions_variant_test(data)
        }
        Test::Serial => serial::serial_test(data, args.serial_block_length),
        Test::LinearComplexity => {
            linear_complexity::linear_complexity_test(data, args.linear_complexity_block_length)
        }
    };

    TestReport::from_result(test, result)
}
