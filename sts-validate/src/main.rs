use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use sts_battery::battery::run_test;
use sts_battery::bitstream::Bitstream;
use sts_battery::TestArgs;
use sts_validate::cli::{CmdArgs, Encoding};
use sts_validate::reference::{parse_reference, reduce, ReferenceTest, REFERENCE_TESTS};
use sts_validate::report::{print_table, CheckRow, CheckStatus};

/// Main function.
///
/// Prints the comparison report to stdout. Exit code SUCCESS when every
/// compared p-value agrees with its reference within the tolerance and lies
/// in [0, 1]; FAILURE on any mismatch or on an unusable dataset.
fn main() -> ExitCode {
    let args = CmdArgs::parse();

    match run(&args) {
        Ok(all_ok) => {
            if all_ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CmdArgs) -> anyhow::Result<bool> {
    let data = load_bitstream(&args.dataset, args.encoding, args.bits)?;
    let test_args = TestArgs::default();

    let rows = REFERENCE_TESTS
        .iter()
        .map(|reference| check_test(reference, &data, args, &test_args))
        .collect::<Vec<_>>();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!(
            "Dataset: {} ({} bits) | Reference dir: {} | tolerance: {:e}",
            args.dataset.display(),
            args.bits,
            args.results.display(),
            args.tolerance
        );
        print_table(&rows);
    }

    Ok(rows.iter().all(|row| row.status != CheckStatus::Mismatch))
}

/// Reads the requested amount of bits from the dataset file.
fn load_bitstream(path: &Path, encoding: Encoding, bits: usize) -> anyhow::Result<Bitstream> {
    match encoding {
        Encoding::Binary => {
            let raw = fs::read(path)
                .with_context(|| format!("failed to read dataset \"{}\"", path.display()))?;

            let needed_bytes = bits.div_ceil(8);
            if raw.len() < needed_bytes {
                anyhow::bail!(
                    "dataset too small: need {needed_bytes} bytes, have {}",
                    raw.len()
                );
            }

            let mut data = Bitstream::from(&raw[..needed_bytes]);
            data.crop(bits);
            Ok(data)
        }
        Encoding::Ascii => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read dataset \"{}\"", path.display()))?;

            Bitstream::from_ascii_limited(&text, bits)
                .with_context(|| format!("dataset contains fewer than {bits} binary digits"))
        }
    }
}

/// Compares one test against its reference file. A missing or unreadable
/// reference skips the test instead of failing the whole run.
fn check_test(
    reference: &ReferenceTest,
    data: &Bitstream,
    args: &CmdArgs,
    test_args: &TestArgs,
) -> CheckRow {
    let name = reference.test.name();
    let path = args
        .results
        .join(reference.directory)
        .join("results.txt");

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(error) => {
            return CheckRow::skipped(name, format!("read {}: {error}", path.display()));
        }
    };

    let values = match parse_reference(&text) {
        Ok(values) => values,
        Err(error) => return CheckRow::skipped(name, format!("{error:#}")),
    };

    let reference_value = reduce(reference, &values);
    let computed = run_test(reference.test, data, test_args).p_value;

    CheckRow::compared(name, computed, reference_value, args.tolerance)
}
