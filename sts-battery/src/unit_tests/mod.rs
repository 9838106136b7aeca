//! Crate-level tests: regression pins for every test kernel on deterministic
//! pseudo-random streams, plus battery-level checks.


/// Deterministic test data: the top byte of a 64-bit LCG per output byte.
pub(crate) fn lcg_bytes(count: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect()
}
