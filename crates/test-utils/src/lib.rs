//! Shared test utilities for the scene color block workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Scene configuration fixtures in both color shapes
//! - Weight list generators
//! - PNG decoding and block-run inspection helpers
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, decode_png, row_runs};
//! ```

pub mod fixtures;
pub mod generators;
pub mod png;

// Re-export commonly used items at the crate root
pub use generators::*;
pub use png::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(block.width, 166.67, 1.0); // floored block width vs share
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Assert that a horizontal run `(start, end, rgb)` matches.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_run;
///
/// assert_run!(runs[0], 0, 375, [255, 0, 0]);
/// ```
#[macro_export]
macro_rules! assert_run {
    ($run:expr, $start:expr, $end:expr, $rgb:expr) => {{
        let run: $crate::png::Run = $run;
        assert_eq!(
            (run.start, run.end, run.rgb),
            ($start, $end, $rgb),
            "unexpected run"
        );
    }};
}
