//! # Building the initial tableau
//!
//! Columns are laid out as the original variables in their canonical order, followed by one slack
//! per constraint and one artificial variable per constraint with a negative right-hand side.
//!
//! A row with a negative right-hand side is multiplied by `-1` as a whole, turning its slack into a
//! surplus. The artificial variable added for it is basic in that row, as the slack can't be.
use std::collections::HashMap;

use log::debug;
use num_traits::{One, Signed, Zero};

use crate::algorithm::two_phase::tableau::column::ColumnInfo;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::model::LinearProgram;
use crate::data::linear_program::variable::ordered;
use crate::data::number_types::rational::Rational;

impl Tableau {
    /// Create the initial tableau of a linear program.
    ///
    /// The objective row holds the negated cost of the problem expressed as a maximization. The
    /// initial basis consists of the slack of every row that was left as is, and the artificial
    /// variable of every row that was multiplied by `-1`.
    pub fn new(program: &LinearProgram) -> Self {
        let variables = ordered(program.variables());
        let index = variables.iter()
            .map(|variable| (variable.name.as_str(), variable.index))
            .collect::<HashMap<_, _>>();

        let nr_variables = variables.len();
        let nr_rows = program.nr_constraints();
        let flipped_rows = program.constraints().iter().enumerate()
            .filter(|(_, constraint)| constraint.rhs().is_negative())
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        let nr_columns = nr_variables + nr_rows + flipped_rows.len();
        let rhs_column = nr_columns;

        let mut matrix = DenseMatrix::zeros(nr_rows + 1, nr_columns + 1);
        for (i, constraint) in program.constraints().iter().enumerate() {
            for (name, value) in constraint.coefficients() {
                matrix.set(i, index[name.as_str()], value.clone());
            }
            matrix.set(i, nr_variables + i, Rational::one());
            matrix.set(i, rhs_column, constraint.rhs().clone());
        }

        let mut basis_indices = (nr_variables..nr_variables + nr_rows).collect::<Vec<_>>();
        for (k, &i) in flipped_rows.iter().enumerate() {
            let artificial = nr_variables + nr_rows + k;
            matrix.multiply_row(i, &-Rational::one());
            matrix.set(i, artificial, Rational::one());
            basis_indices[i] = artificial;
        }

        let direction = program.objective().into::<Rational>();
        let mut cost = variables.iter()
            .map(|variable| &direction * program.cost(&variable.name))
            .collect::<Vec<_>>();
        cost.resize(nr_columns, Rational::zero());
        for (j, value) in cost.iter().enumerate() {
            matrix.set(nr_rows, j, -value);
        }

        let columns = variables.into_iter()
            .map(|variable| ColumnInfo::original(variable.name))
            .chain((0..nr_rows).map(ColumnInfo::slack))
            .chain(flipped_rows.iter().map(|&i| ColumnInfo::artificial(i)))
            .collect();

        debug!(
            "Created tableau with {} rows and {} columns, {} of which artificial",
            nr_rows, nr_columns, flipped_rows.len(),
        );

        Self::from_parts(matrix, basis_indices, columns, cost)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::tableau::column::ColumnKind;
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::data::linear_program::elements::Objective;
    use crate::data::linear_program::model::LinearProgram;
    use crate::RB;
    use crate::tests::{problem_1, problem_2};

    #[test]
    fn feasible_origin() {
        let tableau = Tableau::new(&problem_1::linear_program());
        assert_eq!(tableau.nr_rows(), 3);
        assert_eq!(tableau.nr_columns(), 5);
        assert_eq!(tableau.nr_artificial_variables(), 0);
        assert_eq!(tableau.basis_names(), vec!["s1", "s2", "s3"]);
        assert_eq!(tableau.element(2, 0), &RB!(3));
        assert_eq!(tableau.element(2, 4), &RB!(1));
        assert_eq!(tableau.constraint_value(1), &RB!(12));
        assert!(tableau.is_in_basic_feasible_solution_state());
    }

    #[test]
    fn flipped_row() {
        let tableau = Tableau::new(&problem_2::linear_program());
        assert_eq!(tableau.nr_rows(), 1);
        assert_eq!(tableau.nr_columns(), 4);
        assert_eq!(tableau.kind(2), ColumnKind::Slack);
        assert_eq!(tableau.kind(3), ColumnKind::Artificial);
        assert_eq!(tableau.name(3), "a1");
        assert_eq!(tableau.basis_indices(), &[3]);
        assert!(tableau.has_artificial_in_basis());

        // Surplus column
        assert_eq!(
            tableau.column(2).cloned().collect::<Vec<_>>(),
            vec![RB!(-1)],
        );
        assert_eq!(tableau.element(0, 0), &RB!(1));
        assert_eq!(tableau.constraint_value(0), &RB!(1));

        // Minimization is maximization of the negated cost
        assert_eq!(tableau.cost(), &[RB!(-1), RB!(-1), RB!(0), RB!(0)]);
        assert_eq!(tableau.relative_cost(0), &RB!(1));
    }

    #[test]
    fn column_order() {
        let mut program = LinearProgram::new(Objective::Maximize);
        program.add_variables(["x10", "y", "x2"]).unwrap();
        program.set_cost([("x10", RB!(1)), ("x2", RB!(2))]).unwrap();
        program.add_constraint([("x2", RB!(1)), ("y", RB!(4))], RB!(-3)).unwrap();
        program.add_constraint([("x10", RB!(1))], RB!(3)).unwrap();

        let tableau = Tableau::new(&program);
        let names = (0..tableau.nr_columns()).map(|j| tableau.name(j)).collect::<Vec<_>>();
        assert_eq!(names, vec!["x2", "x10", "y", "s1", "s2", "a1"]);
        assert_eq!(tableau.cost()[..3], [RB!(2), RB!(1), RB!(0)]);
        assert_eq!(tableau.element(0, 2), &RB!(-4));
        assert_eq!(tableau.basis_names(), vec!["a1", "s2"]);
    }

    #[test]
    fn no_constraints() {
        let mut program = LinearProgram::new(Objective::Minimize);
        program.add_variable("x").unwrap();
        let tableau = Tableau::new(&program);
        assert_eq!(tableau.nr_rows(), 0);
        assert_eq!(tableau.nr_columns(), 1);
        assert!(tableau.is_in_basic_feasible_solution_state());
    }
}
