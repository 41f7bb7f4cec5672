//! # Phase one: finding a basic feasible solution
//!
//! When the origin is not feasible, artificial variables are added to the rows with a negative
//! right-hand side. Maximizing minus their sum gives a basic feasible solution of the original
//! problem if and only if that maximum is zero. Afterwards, the artificial variables are removed
//! from the tableau.
use itertools::Itertools;
use log::{debug, warn};
use num_traits::{One, Signed, Zero};

use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::primal::{self, PivotEvent, PrimalResult};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::rational::Rational;

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the original linear program is found.
///
/// # Arguments
///
/// * `tableau`: Tableau with a valid basis, consisting of slack and artificial variables. If the
/// problem is feasible, it has no artificial variables left afterwards.
///
/// # Return value
///
/// Whether the problem is feasible, and the number of pivots made.
pub(crate) fn primal(
    tableau: &mut Tableau,
    rule: &mut dyn PivotRule,
    observer: &mut dyn FnMut(&PivotEvent<'_>),
) -> (RankedFeasibilityResult, usize) {
    set_artificial_cost(tableau);
    debug!(
        "Phase one: {} artificial variables with total value {}",
        tableau.nr_artificial_variables(), -tableau.objective_function_value(),
    );

    let (result, nr_pivots) = primal::primal(tableau, Phase::One, rule, observer);
    let result = match result {
        PrimalResult::Optimal => if tableau.objective_function_value().is_zero() {
            let rank = remove_artificial_variables(tableau);
            RankedFeasibilityResult::Feasible { rank }
        } else {
            debug!("Phase one: artificial variables can't be reduced below {}", -tableau.objective_function_value());
            RankedFeasibilityResult::Infeasible
        },
        PrimalResult::Unbounded => panic!("Artificial cost can not be unbounded."),
        PrimalResult::CycleDetected => {
            warn!("Phase one: cycle detected after {} pivots, reporting the problem as infeasible", nr_pivots);
            RankedFeasibilityResult::Infeasible
        },
    };

    (result, nr_pivots)
}

/// Replace the objective by minus the sum of all artificial variables.
///
/// After canonicalization, the objective row is minus the sum of the rows in which an artificial
/// variable is basic, and its value is minus the sum of their right-hand sides.
fn set_artificial_cost(tableau: &mut Tableau) {
    let cost = (0..tableau.nr_columns())
        .map(|j| if tableau.is_artificial(j) { -Rational::one() } else { Rational::zero() })
        .collect::<Vec<_>>();
    tableau.set_cost_row(&cost);
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum RankedFeasibilityResult {
    /// The problem is feasible, and the tableau holds a basic feasible solution without artificial
    /// variables.
    Feasible {
        /// Whether rows had to be removed.
        rank: Rank,
    },
    /// The problem is not feasible.
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices is provided, that
/// were removed to make the linear program full rank.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Rank {
    /// The matrix is full rank, no rows needed to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Removes all artificial variables from the tableau by making basis changes "at zero level", or
/// without change of cost of the current solution.
///
/// When an artificial variable is still basic, columns with a positive relative cost are zero in
/// every feasible solution, and are removed first. Each artificial variable left in the basis is
/// then replaced by the first remaining column with a nonzero entry in its row. If there is no such
/// column, the row is a linear combination of the other rows, and it is removed.
///
/// # Arguments
///
/// * `tableau`: Tableau at the end of phase one, with objective value zero.
///
/// # Return value
///
/// Whether rows were removed, and if so, which ones.
fn remove_artificial_variables(tableau: &mut Tableau) -> Rank {
    debug_assert!(tableau.objective_function_value().is_zero());

    let mut rows_to_remove = Vec::new();
    if tableau.has_artificial_in_basis() {
        let positive_cost = (0..tableau.nr_columns())
            .filter(|&j| !tableau.is_artificial(j) && !tableau.is_in_basis(j))
            .filter(|&j| tableau.relative_cost(j).is_positive())
            .collect::<Vec<_>>();
        if !positive_cost.is_empty() {
            debug!(
                "Phase one: removing columns {} which are zero in every feasible solution",
                positive_cost.iter().map(|&j| tableau.name(j)).join(", "),
            );
            tableau.remove_columns(&positive_cost);
        }

        for row in 0..tableau.nr_rows() {
            if !tableau.is_artificial(tableau.basis_column_index_for_row(row)) {
                continue;
            }
            debug_assert!(tableau.constraint_value(row).is_zero());

            let pivot_column = (0..tableau.nr_columns())
                .filter(|&j| !tableau.is_artificial(j) && !tableau.is_in_basis(j))
                .find(|&j| !tableau.element(row, j).is_zero());
            match pivot_column {
                Some(column) => {
                    let leaving = tableau.bring_into_basis(column, row);
                    debug!("Phase one: {} replaces {} in row {}", tableau.name(column), tableau.name(leaving), row);
                },
                None => rows_to_remove.push(row),
            }
        }

        if !rows_to_remove.is_empty() {
            debug!("Phase one: removing redundant rows {:?}", rows_to_remove);
            for &row in rows_to_remove.iter().rev() {
                tableau.remove_row(row);
            }
        }
    }

    let artificial = (0..tableau.nr_columns())
        .filter(|&j| tableau.is_artificial(j))
        .collect::<Vec<_>>();
    tableau.remove_columns(&artificial);
    debug_assert!(tableau.is_in_basic_feasible_solution_state());

    if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        Rank::Deficient(rows_to_remove)
    }
}
