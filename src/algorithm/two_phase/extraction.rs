//! # Reading the solution from a tableau
//!
//! Only the original variables are reported, under their own names. Original variables that are
//! not basic, including the ones removed from the tableau at the end of phase one, are zero.
use std::collections::HashMap;
use std::time::Duration;

use enum_map::EnumMap;
use num_traits::Zero;

use crate::algorithm::Status;
use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::tableau::column::ColumnKind;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::model::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::variable::ordered;
use crate::data::number_types::rational::Rational;

/// Values of the original variables in the current basic solution, in column order.
fn current_bfs(program: &LinearProgram, tableau: &Tableau) -> Vec<(String, Rational)> {
    let basic_values = tableau.basis_indices().iter().enumerate()
        .filter(|&(_, &j)| tableau.kind(j) == ColumnKind::Original)
        .map(|(i, &j)| (tableau.name(j), tableau.constraint_value(i)))
        .collect::<HashMap<_, _>>();

    ordered(program.variables()).into_iter()
        .map(|variable| {
            let value = basic_values.get(variable.name.as_str())
                .map_or_else(Rational::zero, |&value| value.clone());
            (variable.name, value)
        })
        .collect()
}

/// Create the result of a solve.
///
/// # Arguments
///
/// * `program`: Problem that was solved.
/// * `tableau`: Terminal tableau of the last phase that ran.
/// * `status`: How the solve ended. Values are only read from the tableau if it is `Optimal`.
pub(crate) fn solution(
    program: &LinearProgram,
    tableau: &Tableau,
    status: Status,
    pivots: EnumMap<Phase, usize>,
    elapsed: EnumMap<Phase, Duration>,
) -> Solution {
    match status {
        Status::Optimal => {
            let objective_value = program.objective().into::<Rational>() * tableau.objective_function_value();
            Solution::new(status, Some(objective_value), current_bfs(program, tableau), pivots, elapsed)
        },
        _ => Solution::new(status, None, Vec::new(), pivots, elapsed),
    }
}
