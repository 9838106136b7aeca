//! Internal functions that are used by tests - can be changed anytime

use std::f64::consts::SQRT_2;

/// The [complementary error function](https://en.wikipedia.org/wiki/Error_function)
pub(crate) use statrs::function::erf::erfc;

/// log-gamma for positive real arguments, needed by the overlapping-template
/// probability helper.
pub(crate) use statrs::function::gamma::ln_gamma;

/// igamc, the regularized upper incomplete gamma function Q(a, x).
///
/// A chi-squared statistic of exactly 0 is reachable (perfectly expected
/// counts), where Q(a, 0) = 1 by definition.
pub(crate) fn igamc(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        1.0
    } else {
        statrs::function::gamma::gamma_ur(a, x)
    }
}

/// The standard normal cumulative distribution function.
#[inline]
pub(crate) fn normal(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// The psi-squared block-pattern statistic over cyclically wrapped `m`-bit
/// windows, shared by the Serial test.
///
/// Each window is turned into a table key by prepending a leading 1 bit and
/// shifting in the `m` window bits; the statistic is
/// `(sum of squared counts) * 2^m / n - n`. Returns 0.0 for `m` = 0.
pub(crate) fn psi2(bits: &[u8], m: usize) -> f64 {
    if m == 0 || bits.is_empty() {
        return 0.0;
    }

    let n = bits.len();
    let mut counts = vec![0_u32; (1 << (m + 1)) - 1];

    for i in 0..n {
        let mut key = 1_usize;
        for j in 0..m {
            if bits[(i + j) % n] == 0 {
                key *= 2;
            } else {
                key = 2 * key + 1;
            }
        }
        counts[key - 1] += 1;
    }

    let mut sum = 0.0;
    for &count in &counts[(1 << m) - 1..(1 << (m + 1)) - 1] {
        sum += f64::powi(count as f64, 2);
    }

    sum * f64::powi(2.0, m as i32) / (n as f64) - (n as f64)
}

/// Guard for every p-value a test returns: a NaN or infinite p-value cannot
/// occur in correct code and is treated as a latent bug.
#[inline]
pub(crate) fn check_p_value(p_value: f64) -> f64 {
    debug_assert!(
        p_value.is_finite(),
        "p-value must be finite, got {p_value}"
    );
    debug_assert!(
        (0.0..=1.0).contains(&p_value),
        "p-value must lie in [0, 1], got {p_value}"
    );
    p_value
}
