//! # Representation of solve results
//!
//! Once a linear program is fully solved, the terminal tableau is turned into a `Solution`: the
//! status, and if the problem has a finite optimum, the objective value and the value of every
//! original variable. Auxiliary variables introduced by the solver are never part of it.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::time::Duration;

use enum_map::EnumMap;

use crate::algorithm::Status;
use crate::algorithm::two_phase::Phase;
use crate::data::number_types::rational::Rational;

/// Result of solving a linear program.
///
/// Also contains statistics about the solve: how many pivots were made, and how much time was spent
/// in each phase.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// How the solve ended.
    status: Status,
    /// Value of the objective function, in the direction of the original problem.
    ///
    /// Only present if the status is `Optimal`.
    objective_value: Option<Rational>,
    /// (variable name, solution value) tuples for all variables, named as in the original problem
    /// and sorted in the order of the tableau columns.
    ///
    /// Empty if the status is not `Optimal`.
    solution_values: Vec<(String, Rational)>,
    /// Number of pivots made in each phase.
    pivots: EnumMap<Phase, usize>,
    /// Time spent in each phase.
    elapsed: EnumMap<Phase, Duration>,
}

impl Solution {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub(crate) fn new(
        status: Status,
        objective_value: Option<Rational>,
        solution_values: Vec<(String, Rational)>,
        pivots: EnumMap<Phase, usize>,
        elapsed: EnumMap<Phase, Duration>,
    ) -> Self {
        debug_assert!(status == Status::Optimal || objective_value.is_none());
        debug_assert!(status == Status::Optimal || solution_values.is_empty());

        Self { status, objective_value, solution_values, pivots, elapsed }
    }

    /// How the solve ended.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether a finite optimum was found.
    pub fn is_optimal(&self) -> bool {
        self.status == Status::Optimal
    }

    /// Optimal value of the objective function, if the problem has a finite optimum.
    pub fn objective_value(&self) -> Option<&Rational> {
        self.objective_value.as_ref()
    }

    /// Value of a variable in the optimal solution.
    ///
    /// `None` if the problem has no finite optimum, or the variable is not part of the problem.
    pub fn value_of(&self, name: &str) -> Option<&Rational> {
        self.solution_values.iter()
            .find(|(variable, _)| variable == name)
            .map(|(_, value)| value)
    }

    /// Values of all original variables in the optimal solution, in column order.
    pub fn assignment(&self) -> &[(String, Rational)] {
        &self.solution_values
    }

    /// Number of pivots made in a phase.
    pub fn pivots(&self, phase: Phase) -> usize {
        self.pivots[phase]
    }

    /// Number of pivots made in both phases together.
    pub fn total_pivots(&self) -> usize {
        self.pivots.values().sum()
    }

    /// Wall-clock time spent in a phase.
    pub fn elapsed(&self, phase: Phase) -> Duration {
        self.elapsed[phase]
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "Status: {}", self.status)?;
        if let Some(value) = &self.objective_value {
            writeln!(f, "Objective value: {}", value)?;
        }
        for (name, value) in &self.solution_values {
            writeln!(f, "{} = {}", name, value)?;
        }
        writeln!(
            f,
            "Pivots: {} (phase one), {} (phase two)",
            self.pivots[Phase::One], self.pivots[Phase::Two],
        )
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use enum_map::enum_map;

    use crate::algorithm::Status;
    use crate::algorithm::two_phase::Phase;
    use crate::data::linear_program::solution::Solution;
    use crate::RB;

    fn solution() -> Solution {
        Solution::new(
            Status::Optimal,
            Some(RB!(36)),
            vec![("x1".to_string(), RB!(2)), ("x2".to_string(), RB!(6))],
            enum_map! { Phase::One => 0, Phase::Two => 3 },
            enum_map! { _ => Duration::ZERO },
        )
    }

    #[test]
    fn accessors() {
        let solution = solution();
        assert!(solution.is_optimal());
        assert_eq!(solution.objective_value(), Some(&RB!(36)));
        assert_eq!(solution.value_of("x2"), Some(&RB!(6)));
        assert_eq!(solution.value_of("s1"), None);
        assert_eq!(solution.total_pivots(), 3);
        assert_eq!(solution.pivots(Phase::One), 0);
    }

    #[test]
    fn display() {
        assert_eq!(solution().to_string(), "\
Status: Optimal
Objective value: 36
x1 = 2
x2 = 6
Pivots: 0 (phase one), 3 (phase two)
");
    }
}
