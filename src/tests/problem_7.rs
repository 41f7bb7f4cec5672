//! Linear program with several artificial variables.
//!
//! After a single pivot in the first phase, two artificial variables are still basic at zero level.
//! The optimum is 1, at `x = 1` and `y = 0`.
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::model::LinearProgram;
use crate::RB;

/// Minimize `x + y` subject to `x >= 1`, `x + y >= 1` and `x - y >= 1`.
pub fn linear_program() -> LinearProgram {
    let mut program = LinearProgram::new(Objective::Minimize);
    program.add_variables(["x", "y"]).unwrap();
    program.set_cost([("x", RB!(1)), ("y", RB!(1))]).unwrap();
    program.add_constraint([("x", RB!(-1))], RB!(-1)).unwrap();
    program.add_constraint([("x", RB!(-1)), ("y", RB!(-1))], RB!(-1)).unwrap();
    program.add_constraint([("x", RB!(-1)), ("y", RB!(1))], RB!(-1)).unwrap();

    program
}
