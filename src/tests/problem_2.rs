//! Minimization that needs a first phase.
//!
//! The optimum is 1, attained on the whole segment `x1 + x2 = 1`.
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::model::LinearProgram;
use crate::RB;

/// Minimize `x1 + x2` subject to `x1 + x2 >= 1`.
pub fn linear_program() -> LinearProgram {
    let mut program = LinearProgram::new(Objective::Minimize);
    program.add_variables(["x1", "x2"]).unwrap();
    program.set_cost([("x1", RB!(1)), ("x2", RB!(1))]).unwrap();
    program.add_constraint([("x1", RB!(-1)), ("x2", RB!(-1))], RB!(-1)).unwrap();

    program
}
