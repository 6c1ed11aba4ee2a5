//! Generators for weighted color lists.
//!
//! These generators create predictable, verifiable inputs for layout and
//! rendering tests. Output is JSON so it can be fed through the same
//! deserialization path as real configuration.

use serde_json::{json, Value};

/// `n` entries of weight 1.
pub fn equal_weights(n: usize) -> Vec<f64> {
    vec![1.0; n]
}

/// Weights `1, 2, ..., n`.
pub fn linear_weights(n: usize) -> Vec<f64> {
    (1..=n).map(|w| w as f64).collect()
}

/// Deterministic pseudo-random weights in `[0, max)`.
///
/// Uses a fixed linear congruential generator so failures reproduce.
///
/// # Example
///
/// ```
/// use test_utils::seeded_weights;
///
/// let a = seeded_weights(42, 8, 10.0);
/// let b = seeded_weights(42, 8, 10.0);
/// assert_eq!(a, b);
/// assert!(a.iter().all(|w| *w >= 0.0 && *w < 10.0));
/// ```
pub fn seeded_weights(seed: u64, n: usize, max: f64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            unit * max
        })
        .collect()
}

/// A distinct, non-black color for entry `i`.
pub fn palette_color(i: usize) -> [u8; 3] {
    let i = i as u32;
    [
        (40 + (i * 67) % 200) as u8,
        (40 + (i * 131) % 200) as u8,
        (40 + (i * 29) % 200) as u8,
    ]
}

/// JSON color list pairing each weight with [`palette_color`].
pub fn entries_json(weights: &[f64]) -> Value {
    Value::Array(
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| json!({"color": palette_color(i), "weight": w}))
            .collect(),
    )
}
