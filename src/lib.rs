//! # An exact linear program solver
//!
//! Linear programs are solved using the Simplex Method as described in the book Combinatorial
//! Optimization by Christos H. Papadimitriou and Kenneth Steiglitz. All arithmetic is done with
//! arbitrary precision rational numbers, so results are exact.
//!
//! ```
//! use exact_simplex::{LinearProgram, Objective, RB, solve, SolveOptions, Status};
//!
//! let mut program = LinearProgram::new(Objective::Maximize);
//! program.add_variables(["x1", "x2"]).unwrap();
//! program.set_cost([("x1", RB!(3)), ("x2", RB!(5))]).unwrap();
//! program.add_constraint([("x1", RB!(1))], RB!(4)).unwrap();
//! program.add_constraint([("x2", RB!(2))], RB!(12)).unwrap();
//! program.add_constraint([("x1", RB!(3)), ("x2", RB!(2))], RB!(18)).unwrap();
//!
//! let solution = solve(&program, &SolveOptions::default());
//! assert_eq!(solution.status(), Status::Optimal);
//! assert_eq!(solution.objective_value(), Some(&RB!(36)));
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;

pub use crate::algorithm::{Solve, Status};
pub use crate::algorithm::two_phase::{Phase, solve, SolveOptions, Solver};
pub use crate::algorithm::two_phase::primal::PivotEvent;
pub use crate::algorithm::two_phase::strategy::pivot_rule::PivotRuleKind;
pub use crate::data::linear_program::elements::Objective;
pub use crate::data::linear_program::error::InconsistencyError;
pub use crate::data::linear_program::model::LinearProgram;
pub use crate::data::linear_program::solution::Solution;
pub use crate::data::number_types::rational::Rational;
