//! Beale's example of cycling.
//!
//! Dantzig's rule with the first row winning ratio ties returns to the starting basis after six
//! pivots. Bland's rule reaches the optimum 5/4, at `x4 = 1` and `x6 = 1`.
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::model::LinearProgram;
use crate::RB;

/// Maximize `3/4 x4 - 20 x5 + 1/2 x6 - 6 x7` subject to
///
/// * `1/4 x4 - 8 x5 - x6 + 9 x7 <= 0`
/// * `1/2 x4 - 12 x5 - 1/2 x6 + 3 x7 <= 0`
/// * `x6 <= 1`
pub fn linear_program() -> LinearProgram {
    let mut program = LinearProgram::new(Objective::Maximize);
    program.add_variables(["x4", "x5", "x6", "x7"]).unwrap();
    program.set_cost([("x4", RB!(3, 4)), ("x5", RB!(-20)), ("x6", RB!(1, 2)), ("x7", RB!(-6))]).unwrap();
    program.add_constraint(
        [("x4", RB!(1, 4)), ("x5", RB!(-8)), ("x6", RB!(-1)), ("x7", RB!(9))],
        RB!(0),
    ).unwrap();
    program.add_constraint(
        [("x4", RB!(1, 2)), ("x5", RB!(-12)), ("x6", RB!(-1, 2)), ("x7", RB!(3))],
        RB!(0),
    ).unwrap();
    program.add_constraint([("x6", RB!(1))], RB!(1)).unwrap();

    program
}
