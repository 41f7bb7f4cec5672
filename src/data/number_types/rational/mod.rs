//! # Rational numbers
//!
//! Primary way to do arbitrary precision computation. Values are a numerator and denominator pair
//! over big integers, always kept in lowest terms.
pub use num::BigInt;
pub use num::BigRational as Rational;

mod macros;
