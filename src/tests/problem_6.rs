//! Linear program with a redundant row.
//!
//! The two rows together are the equality `x + y = 1`. The artificial variable of the second row
//! can't be driven out of the basis after the first phase.
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::model::LinearProgram;
use crate::RB;

/// Minimize `x` subject to `x + y <= 1` and `x + y >= 1`.
pub fn linear_program() -> LinearProgram {
    let mut program = LinearProgram::new(Objective::Minimize);
    program.add_variables(["x", "y"]).unwrap();
    program.set_cost([("x", RB!(1))]).unwrap();
    program.add_constraint([("x", RB!(1)), ("y", RB!(1))], RB!(1)).unwrap();
    program.add_constraint([("x", RB!(-1)), ("y", RB!(-1))], RB!(-1)).unwrap();

    program
}
