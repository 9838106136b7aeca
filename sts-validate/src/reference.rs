//! Reading and reducing NIST reference result files.

use anyhow::{bail, Context};
use sts_battery::Test;

/// One entry of the comparison plan: which test, where the NIST STS stores
/// its reference p-values, and whether the reference vector is reduced by
/// minimum before the comparison.
///
/// The reduction applies to the tests whose reference output carries one
/// p-value per direction, template or state while the battery reports their
/// minimum.
pub struct ReferenceTest {
    pub test: Test,
    pub directory: &'static str,
    pub reduce_min: bool,
}

/// The comparison plan, in battery order. The directory names are the ones
/// the NIST STS uses for its experiment subdirectories.
pub const REFERENCE_TESTS: [ReferenceTest; 15] = [
    ReferenceTest {
        test: Test::Frequency,
        directory: "Frequency",
        reduce_min: false,
    },
    ReferenceTest {
        test: Test::BlockFrequency,
        directory: "BlockFrequency",
        reduce_min: false,
    },
    ReferenceTest {
        test: Test::CumulativeSums,
        directory: "CumulativeSums",
        reduce_min: true,
    },
    ReferenceTest {
        test: Test::Runs,
        directory: "Runs",
        reduce_min: false,
    },
    ReferenceTest {
        test: Test::LongestRun,
        directory: "LongestRun",
        reduce_min: false,
    },
    ReferenceTest {
        test: Test::BinaryMatrixRank,
        directory: "Rank",
        reduce_min: false,
    },
    ReferenceTest {
        test: Test::DiscreteFourierTransform,
        directory: "FFT",
        reduce_min: false,
    },
    ReferenceTest {
        test: Test::NonOverlappingTemplate,
        directory: "NonOverlappingTemplate",
        reduce_min: true,
    },
    ReferenceTest {
        test: Test::OverlappingTemplate,
        directory: "OverlappingTemplate",
        reduce_min: false,
    },
    ReferenceTest {
        test: Test::UniversalStatistical,
        directory: "Universal",
        reduce_min: false,
    },
    ReferenceTest {
        test: Test::ApproximateEntropy,
        directory: "ApproximateEntropy",
        reduce_min: false,
    },
    ReferenceTest {
        test: Test::RandomExcursions,
        directory: "RandomExcursions",
        reduce_min: true,
    },
    ReferenceTest {
        test: Test::RandomExcursionsVariant,
        directory: "RandomExcursionsVariant",
        reduce_min: true,
    },
    ReferenceTest {
        test: Test::Serial,
        directory: "Serial",
        reduce_min: true,
    },
    ReferenceTest {
        test: Test::LinearComplexity,
        directory: "LinearComplexity",
        reduce_min: false,
    },
];

/// Parses a reference results file: one p-value per line, blank lines
/// skipped, additional columns after the p-value ignored.
pub fn parse_reference(text: &str) -> anyhow::Result<Vec<f64>> {
    let mut values = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let token = line.split_whitespace().next().unwrap_or(line);
        let value: f64 = token
            .parse()
            .with_context(|| format!("cannot parse reference value {line:?}"))?;
        values.push(value);
    }
    if values.is_empty() {
        bail!("reference file contains no values");
    }
    Ok(values)
}

/// Reduces the reference vector to the value the battery reports: its
/// minimum for multi-value tests, the single value otherwise.
pub fn reduce(reference: &ReferenceTest, values: &[f64]) -> f64 {
    if reference.reduce_min {
        values.iter().copied().fold(f64::INFINITY, f64::min)
    } else {
        values[0]
    }
}
