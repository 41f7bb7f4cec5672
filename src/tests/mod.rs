//! # Small linear programs shared by the unit tests.
//!
//! Each module provides the problem as `fn linear_program()`. Optimal values and the pivots made by
//! the different rules were computed by hand.
pub mod problem_2;
pub mod problem_6;
pub mod problem_7;
pub mod problem_8;

/// Show solver logging in test output, filtered by `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
