//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent linear programs in memory. Algorithms
//! may introduce their specific data structures in `algorithm::my_algorithm`.
pub mod linear_algebra;
pub mod linear_program;
pub mod number_types;
