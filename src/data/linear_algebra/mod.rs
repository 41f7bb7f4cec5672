//! # Linear algebra primitives
//!
//! The simplex tableau is small and dense, so only a dense matrix is provided.
pub mod matrix;
