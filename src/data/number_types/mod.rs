//! # Number types
//!
//! The algorithms in this crate are defined over an ordered field. Pivot decisions compare reduced
//! costs and ratios with each other and with zero, so the field used to actually solve problems is
//! the field of arbitrary precision rational numbers: no rounding happens at any step.
pub mod traits;
pub mod rational;
