//! # Algorithms
use std::fmt::{Display, Formatter, Result as FormatResult};

use crate::algorithm::two_phase::SolveOptions;
use crate::data::linear_program::model::LinearProgram;
use crate::data::linear_program::solution::Solution;

pub mod two_phase;
pub mod utilities;

/// A problem formulation that can be solved.
pub trait Solve {
    /// Solve this problem.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded.
    fn solve(&self, options: &SolveOptions) -> Solution;
}

impl Solve for LinearProgram {
    fn solve(&self, options: &SolveOptions) -> Solution {
        two_phase::solve(self, options)
    }
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm. If the algorithm revisits a basis, it stops
/// without a conclusion.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    Optimal,
    Unbounded,
    Infeasible,
    CycleDetected,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.write_str(match self {
            Status::Optimal => "Optimal",
            Status::Unbounded => "Unbounded",
            Status::Infeasible => "Infeasible",
            Status::CycleDetected => "Cycle detected",
        })
    }
}
