//! # Pivoting
//!
//! The loop shared by both phases: select an entering column, find the leaving row, pivot, and
//! stop when no column improves the objective, when a column can be increased without bound, or
//! when a basis repeats.
use std::collections::HashSet;

use log::trace;

use crate::algorithm::two_phase::Phase;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::rational::Rational;

/// How a run of the primal Simplex method ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) enum PrimalResult {
    /// No non-basic column has a negative relative cost.
    Optimal,
    /// The entering column has no positive entry.
    Unbounded,
    /// A basis was visited twice.
    CycleDetected,
}

/// A basis change, as seen by an observer.
///
/// The tableau is in the state directly after the pivot.
#[derive(Debug)]
pub struct PivotEvent<'a> {
    /// Phase in which the pivot happened.
    pub phase: Phase,
    /// Number of pivots made in this phase so far, this one included.
    pub pivot: usize,
    /// Column index of the variable that entered the basis.
    pub entering: usize,
    /// Column index of the variable that left the basis.
    pub leaving: usize,
    /// Row in which the pivot happened.
    pub row: usize,
    /// The tableau after the pivot.
    pub tableau: &'a Tableau,
}

impl PivotEvent<'_> {
    /// Name of the variable that entered the basis.
    pub fn entering_name(&self) -> &str {
        self.tableau.name(self.entering)
    }

    /// Name of the variable that left the basis.
    pub fn leaving_name(&self) -> &str {
        self.tableau.name(self.leaving)
    }

    /// Names of the basic variables, by row.
    pub fn basis_names(&self) -> Vec<&str> {
        self.tableau.basis_names()
    }

    /// Value of the objective function that is maximized in this phase.
    pub fn objective_function_value(&self) -> &Rational {
        self.tableau.objective_function_value()
    }
}

/// Maximize the objective that is currently in the objective row of the tableau.
///
/// The tableau needs to be in a basic feasible solution state at the start.
///
/// # Arguments
///
/// * `tableau`: Tableau to pivot on.
/// * `phase`: Only used for reporting.
/// * `rule`: Chooses the entering column, and how to break ties between leaving rows.
/// * `observer`: Called after every pivot.
///
/// # Return value
///
/// How the run ended, and the number of pivots made.
pub(crate) fn primal(
    tableau: &mut Tableau,
    phase: Phase,
    rule: &mut dyn PivotRule,
    observer: &mut dyn FnMut(&PivotEvent<'_>),
) -> (PrimalResult, usize) {
    let mut visited = HashSet::new();
    visited.insert(tableau.basis_indices().to_vec());

    let mut nr_pivots = 0;
    loop {
        debug_assert!(tableau.is_in_basic_feasible_solution_state());

        let Some((column, cost)) = rule.select_primal_pivot_column(tableau) else {
            break (PrimalResult::Optimal, nr_pivots);
        };
        let Some(row) = tableau.select_primal_pivot_row(column, rule.ratio_tie_break()) else {
            trace!("Phase {}: column {} has relative cost {} but no bounding row", phase, tableau.name(column), cost);
            break (PrimalResult::Unbounded, nr_pivots);
        };
        trace!(
            "Phase {}: {} enters in row {} with relative cost {}, ratio {}",
            phase, tableau.name(column), row, cost, tableau.constraint_value(row) / tableau.element(row, column),
        );

        let leaving = tableau.bring_into_basis(column, row);
        nr_pivots += 1;
        trace!(
            "Phase {}: {} left the basis, objective value is now {}",
            phase, tableau.name(leaving), tableau.objective_function_value(),
        );

        observer(&PivotEvent { phase, pivot: nr_pivots, entering: column, leaving, row, tableau });

        if !visited.insert(tableau.basis_indices().to_vec()) {
            trace!("Phase {}: basis {:?} was visited before", phase, tableau.basis_names());
            break (PrimalResult::CycleDetected, nr_pivots);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::Phase;
    use crate::algorithm::two_phase::primal::{primal, PivotEvent, PrimalResult};
    use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule, PivotRuleKind, SteepestDescentAlongVariable};
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::number_types::rational::Rational;
    use crate::RB;
    use crate::tests::{init_logging, problem_1, problem_3, problem_5};

    fn ignore(_: &PivotEvent<'_>) {}

    #[test]
    fn finite_optimum() {
        init_logging();

        let mut tableau = Tableau::new(&problem_1::linear_program());
        let mut seen = Vec::new();
        let result = primal(
            &mut tableau,
            Phase::Two,
            &mut SteepestDescentAlongVariable,
            &mut |event: &PivotEvent<'_>| seen.push((
                event.pivot,
                event.entering_name().to_string(),
                event.leaving_name().to_string(),
                event.objective_function_value().clone(),
            )),
        );
        assert_eq!(result, (PrimalResult::Optimal, 2));
        assert!(tableau.profitable_columns().next().is_none());
        assert_eq!(seen, vec![
            (1, "x2".to_string(), "s2".to_string(), RB!(30)),
            (2, "x1".to_string(), "s3".to_string(), RB!(36)),
        ]);
        assert_eq!(tableau.objective_function_value(), &RB!(36));
    }

    #[test]
    fn first_profitable() {
        // x1 enters first: 12, then x2: 27, then s1: 36
        let mut tableau = Tableau::new(&problem_1::linear_program());
        let result = primal(&mut tableau, Phase::Two, &mut FirstProfitable, &mut ignore);
        assert_eq!(result, (PrimalResult::Optimal, 3));
        assert!(tableau.profitable_columns().next().is_none());
        assert_eq!(tableau.objective_function_value(), &RB!(36));
    }

    #[test]
    fn unbounded() {
        let mut tableau = Tableau::new(&problem_3::linear_program());
        let result = primal(&mut tableau, Phase::Two, &mut SteepestDescentAlongVariable, &mut ignore);
        assert_eq!(result, (PrimalResult::Unbounded, 1));
    }

    #[test]
    fn degenerate() {
        let mut tableau = Tableau::new(&problem_5::linear_program());
        let result = primal(&mut tableau, Phase::Two, &mut SteepestDescentAlongVariable, &mut ignore);
        assert_eq!(result, (PrimalResult::Optimal, 2));
        assert!(tableau.profitable_columns().next().is_none());
        assert_eq!(tableau.objective_function_value(), &RB!(2));
        assert_eq!(tableau.basis_names(), vec!["x", "y"]);
        assert_eq!(tableau.constraint_value(1), &RB!(0));
    }

    #[test]
    fn every_rule() {
        // No vertex of this program is degenerate, so every rule terminates.
        for kind in PivotRuleKind::ALL {
            let mut tableau = Tableau::new(&problem_1::linear_program());
            let mut rule = kind.build(7);
            let (result, _) = primal(&mut tableau, Phase::Two, rule.as_mut(), &mut ignore);
            assert_eq!(result, PrimalResult::Optimal, "{}", kind);
            assert!(tableau.profitable_columns().next().is_none(), "{}", kind);
            assert_eq!(tableau.objective_function_value(), &RB!(36), "{}", kind);
        }
    }

    /// Swaps `x` and `s1` in and out of the basis, regardless of cost.
    struct Alternating;
    impl PivotRule for Alternating {
        fn select_primal_pivot_column<'t>(&mut self, tableau: &'t Tableau) -> Option<(usize, &'t Rational)> {
            let j = if tableau.is_in_basis(0) { 2 } else { 0 };
            Some((j, tableau.relative_cost(j)))
        }
    }

    #[test]
    fn cycle() {
        let mut tableau = Tableau::new(&problem_5::linear_program());
        let result = primal(&mut tableau, Phase::Two, &mut Alternating, &mut ignore);
        assert_eq!(result, (PrimalResult::CycleDetected, 2));
        assert_eq!(tableau.basis_names(), vec!["s1", "s2"]);
    }
}
