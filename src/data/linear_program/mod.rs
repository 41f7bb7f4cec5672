//! # Representing linear programs
//!
//! This module contains the description of a linear program as it is handed to the solver, and the
//! description of the result the solver hands back.
pub mod elements;
pub mod error;
pub mod model;
pub mod solution;
pub mod variable;
