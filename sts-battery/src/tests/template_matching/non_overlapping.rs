//! Non-overlapping template matching test.
//!
//! This test detects generators that produce too many (or too few)
//! occurrences of given aperiodic patterns. The sequence is split into 8
//! blocks; within each block an m-bit window searches for each template,
//! restarting the window behind a match.
//!
//! Only the built-in template library of length 9 is supported. The test
//! reports the minimum p-value across all templates as its summary; the full
//! per-template vector is available from
//! [non_overlapping_template_p_values].

use super::{template_bits, TEMPLATES, TEMPLATE_LENGTH};
use crate::bitstream::Bitstream;
use crate::internals::{check_p_value, igamc};
use crate::TestResult;
use rayon::prelude::*;

/// The number of independent blocks the sequence is split into.
const BLOCK_COUNT: usize = 8;

/// Non-overlapping template matching test - No. 7
///
/// `template_length` must be [TEMPLATE_LENGTH]; every other value rejects.
///
/// The result is the minimum p-value across the template library.
/// See the [module docs](crate::tests::template_matching::non_overlapping).
pub fn non_overlapping_template_test(data: &Bitstream, template_length: usize) -> TestResult {
    match non_overlapping_template_p_values(data, template_length) {
        Some(p_values) => {
            // the vector is never empty: the template library has 148 entries
            let min = p_values.into_iter().fold(1.0_f64, f64::min);
            TestResult::new(check_p_value(min))
        }
        None if template_length != TEMPLATE_LENGTH => {
            TestResult::rejected("only the built-in template length 9 is supported")
        }
        None => TestResult::rejected("block length is smaller than the template length"),
    }
}

/// The per-template p-values of the non-overlapping template matching test,
/// in template-library order. `None` when the preconditions are not met.
pub fn non_overlapping_template_p_values(
    data: &Bitstream,
    template_length: usize,
) -> Option<Vec<f64>> {
    if template_length != TEMPLATE_LENGTH {
        return None;
    }

    // Step 1: split into 8 blocks of M = n / 8 bits
    let block_length = data.len_bit() / BLOCK_COUNT;
    if block_length < template_length {
        return None;
    }

    let bits = data.expand();

    // Step 2: the theoretical mean and variance of the match count per block
    let power = f64::powi(2.0, template_length as i32);
    let mean = ((block_length - template_length + 1) as f64) / power;
    let variance = (block_length as f64)
        * (1.0 / power - (2.0 * (template_length as f64) - 1.0) / (power * power));

    // Step 3 + 4: for each template, count the matches per block and reduce
    // them to a chi^2 / p-value. Templates are independent of each other, so
    // they are processed in parallel; the chi^2 accumulation per template
    // stays in block order.
    let p_values = TEMPLATES
        .par_iter()
        .map(|&template| {
            let pattern = template_bits(template);

            let mut chi_squared = 0.0;
            for block in bits.chunks_exact(block_length).take(BLOCK_COUNT) {
                let matches = count_matches(block, &pattern);
                chi_squared += f64::powi((matches as f64) - mean, 2) / variance;
            }

            igamc((BLOCK_COUNT as f64) / 2.0, chi_squared / 2.0)
        })
        .collect();

    Some(p_values)
}

/// Count the non-overlapping occurrences of the pattern: after a match the
/// window restarts behind the matched bits.
fn count_matches(block: &[u8], pattern: &[u8; TEMPLATE_LENGTH]) -> usize {
    let mut matches = 0;
    let mut j = 0;
    while j + TEMPLATE_LENGTH <= block.len() {
        if &block[j..j + TEMPLATE_LENGTH] == pattern {
            matches += 1;
            j += TEMPLATE_LENGTH;
        } else {
            j += 1;
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ALPHA;

    #[test]
    fn unsupported_template_length_rejects() {
        let data = Bitstream::from(vec![0xAA; 1000]);
        let result = non_overlapping_template_test(&data, 10);
        assert_eq!(result.p_value(), 0.0);
        assert!(!result.passed(ALPHA));
        assert!(non_overlapping_template_p_values(&data, 10).is_none());
    }

    #[test]
    fn short_input_rejects() {
        // 8 bytes: the block length 8 is below the template length
        let result = non_overlapping_template_test(&Bitstream::from(vec![0xAA; 8]), 9);
        assert_eq!(result.p_value(), 0.0);
        assert!(result.comment().is_some());
    }

    #[test]
    fn counts_restart_behind_a_match() {
        // the periodic pattern occurs at offsets 0 and 2 of this block; the
        // non-overlapping scan counts only the first occurrence and restarts
        // behind it
        let pattern = template_bits(0b101010101);
        let mut block = [0_u8; 20];
        for slot in block.iter_mut().step_by(2).take(6) {
            *slot = 1;
        }
        assert_eq!(count_matches(&block, &pattern), 1);

        // two adjacent occurrences count individually
        let mut block = [0_u8; 22];
        block[..9].copy_from_slice(&pattern);
        block[9..18].copy_from_slice(&pattern);
        assert_eq!(count_matches(&block, &pattern), 2);
    }

    #[test]
    fn p_value_vector_covers_the_library() {
        let data = Bitstream::from(vec![0b0110_1001; 200]);
        let p_values = non_overlapping_template_p_values(&data, 9).unwrap();
        assert_eq!(p_values.len(), 148);
        assert!(p_values.iter().all(|p| (0.0..=1.0).contains(p)));
    }
}
