//! Command line arguments of the validation tool.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compares the battery's p-values against the results of the NIST reference
/// implementation for one dataset.
///
/// The reference directory is an experiment directory of the NIST STS
/// (e.g. `experiments/AlgorithmTesting`), containing one subdirectory per
/// test with a `results.txt` file of p-values.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CmdArgs {
    /// Path to the dataset file (e.g. the NIST data.pi).
    #[arg(short, long)]
    pub dataset: PathBuf,
    /// The number of bits to read from the dataset.
    #[arg(short, long, default_value_t = 1_000_000)]
    pub bits: usize,
    /// Path to the directory with the NIST reference results.
    #[arg(short, long)]
    pub results: PathBuf,
    /// The absolute tolerance for the p-value comparison.
    #[arg(short, long, default_value_t = 1e-6)]
    pub tolerance: f64,
    /// The dataset encoding.
    #[arg(short, long, value_enum, default_value = "ascii")]
    pub encoding: Encoding,
    /// Print the report as JSON instead of an aligned table.
    #[arg(short, long)]
    pub json: bool,
}

/// How the dataset file stores its bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// ASCII '0' and '1' characters; everything else is ignored.
    Ascii,
    /// Raw bytes, 8 bits each, big-endian bit order.
    Binary,
}
