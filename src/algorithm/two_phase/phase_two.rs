//! # Phase two: optimizing
//!
//! Starting from a basic feasible solution without artificial variables, the actual objective is
//! maximized.
use log::debug;

use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::primal::{self, PivotEvent, PrimalResult};
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;

/// Put the actual objective back into the objective row after phase one.
///
/// The relative costs are computed with respect to the basis that phase one found.
pub(crate) fn restore_cost(tableau: &mut Tableau) {
    debug_assert_eq!(tableau.nr_artificial_variables(), 0);

    tableau.restore_cost_row();
    debug!("Phase two: starting from objective value {}", tableau.objective_function_value());
}

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primary feasibility)
///
/// # Return value
///
/// Whether the problem has a finite optimum, and the number of pivots made. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal(
    tableau: &mut Tableau,
    rule: &mut dyn PivotRule,
    observer: &mut dyn FnMut(&PivotEvent<'_>),
) -> (PrimalResult, usize) {
    let (result, nr_pivots) = primal::primal(tableau, Phase::Two, rule, observer);
    debug!("Phase two: {:?} after {} pivots", result, nr_pivots);

    (result, nr_pivots)
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::phase_one::{self, RankedFeasibilityResult};
    use crate::algorithm::two_phase::phase_two::{primal, restore_cost};
    use crate::algorithm::two_phase::primal::{PivotEvent, PrimalResult};
    use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::RB;
    use crate::tests::{problem_2, problem_6};

    fn ignore(_: &PivotEvent<'_>) {}

    #[test]
    fn after_phase_one() {
        let mut tableau = Tableau::new(&problem_2::linear_program());
        let (result, _) = phase_one::primal(&mut tableau, &mut FirstProfitable, &mut ignore);
        assert!(matches!(result, RankedFeasibilityResult::Feasible { .. }));

        restore_cost(&mut tableau);
        // Maximizing -x1 - x2 with x1 = 1
        assert_eq!(tableau.objective_function_value(), &RB!(-1));
        assert_eq!(tableau.relative_cost(0), &RB!(0));
        assert!(tableau.is_in_basic_feasible_solution_state());

        let result = primal(&mut tableau, &mut FirstProfitable, &mut ignore);
        assert_eq!(result, (PrimalResult::Optimal, 0));
        assert!(tableau.profitable_columns().next().is_none());
    }

    #[test]
    fn after_row_removal() {
        let mut tableau = Tableau::new(&problem_6::linear_program());
        let (result, _) = phase_one::primal(&mut tableau, &mut SteepestDescentAlongVariable, &mut ignore);
        assert!(matches!(result, RankedFeasibilityResult::Feasible { .. }));

        restore_cost(&mut tableau);
        let result = primal(&mut tableau, &mut SteepestDescentAlongVariable, &mut ignore);
        assert_eq!(result, (PrimalResult::Optimal, 1));
        assert!(tableau.profitable_columns().next().is_none());
        assert_eq!(tableau.objective_function_value(), &RB!(0));
        assert_eq!(tableau.basis_names(), vec!["y"]);
    }
}
