//! Test modules relocated from implementation files.
//!
//! Larger suites live here instead of inline `#[cfg(test)]` blocks:
//! operator semantics and whole-program evaluation.

mod operators_tests;
