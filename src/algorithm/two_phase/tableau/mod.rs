//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! The tableau is stored explicitly as a dense matrix of exact rationals. Its first `m` rows are the
//! constraint rows, the last row is the objective row. The last column is the right-hand side. The
//! objective row holds the relative cost of every column, and in its right-hand side the current
//! value of the (maximized) objective function. Every basis change is a full Gauss-Jordan
//! elimination step, so the basic columns are always unit vectors with zero relative cost.
use std::cmp::max;
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::mem;

use num_traits::{One, Signed, Zero};

use crate::algorithm::two_phase::tableau::column::{ColumnInfo, ColumnKind};
use crate::algorithm::utilities::remove_indices;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::number_types::rational::Rational;

pub mod column;
mod construction;

/// How to choose between rows that attain the same minimum ratio.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RatioTieBreak {
    /// Take the topmost row.
    FirstRow,
    /// Take the row whose basic variable has the lowest column index (Bland's rule).
    LowestBasicColumn,
}

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns a copy of the problem data, transformed with respect to the current basis.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Tableau {
    /// Size (m + 1) x (n + 1): the constraint rows and the objective row, with the right-hand side
    /// as the last column.
    ///
    /// This attribute changes with a basis change.
    matrix: DenseMatrix<Rational>,

    /// Maps the rows to the column containing its pivot.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,

    /// What the column at each index represents.
    columns: Vec<ColumnInfo>,
    /// Cost of each column in the maximization problem that the second phase solves.
    ///
    /// Zero for all slack and artificial columns.
    cost: Vec<Rational>,
}

impl Tableau {
    fn from_parts(
        matrix: DenseMatrix<Rational>,
        basis_indices: Vec<usize>,
        columns: Vec<ColumnInfo>,
        cost: Vec<Rational>,
    ) -> Self {
        debug_assert_eq!(matrix.nr_rows(), basis_indices.len() + 1);
        debug_assert_eq!(matrix.nr_columns(), columns.len() + 1);
        debug_assert_eq!(columns.len(), cost.len());

        let basis_columns = basis_indices.iter().copied().collect();

        Self { matrix, basis_indices, basis_columns, columns, cost }
    }

    /// Brings a column into the basis by a Gauss-Jordan elimination step on the pivot element.
    ///
    /// The pivot row is divided by the pivot element, after which a multiple of it is subtracted
    /// from every other row, including the objective row.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column index of the entering variable, not yet in the basis.
    /// * `pivot_row_index`: Row index of the pivot, in range `0` until `self.nr_rows()`.
    ///
    /// # Return value
    ///
    /// The column index of the variable that left the basis.
    ///
    /// # Panics
    ///
    /// When the pivot element is zero. No pivot rule or ratio test should ever select such an
    /// element, so this is a logic error.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) -> usize {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let pivot = self.matrix.get(pivot_row_index, pivot_column_index).clone();
        assert!(
            !pivot.is_zero(),
            "Pivot element in row {} and column {} is zero", pivot_row_index, pivot_column_index,
        );
        self.matrix.divide_row(pivot_row_index, &pivot);

        for i in 0..self.matrix.nr_rows() {
            if i == pivot_row_index {
                continue;
            }
            let factor = self.matrix.get(i, pivot_column_index).clone();
            if !factor.is_zero() {
                self.matrix.subtract_multiple_of_row(pivot_row_index, i, &factor);
            }
        }

        let leaving_column = mem::replace(&mut self.basis_indices[pivot_row_index], pivot_column_index);
        self.update_basis_indices(pivot_column_index, leaving_column);

        leaving_column
    }

    /// Update the set of basis columns.
    ///
    /// Removes the index of the variable leaving the basis, while inserting the entering variable
    /// index.
    fn update_basis_indices(&mut self, pivot_column: usize, leaving_column: usize) {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(leaving_column < self.nr_columns());

        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the positive but
    /// minimal ratio between the current constraint vector and the column.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column.
    /// * `tie_break`: Which row to take when several attain the minimum ratio.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded in the direction of the
    /// column.
    pub fn select_primal_pivot_row(&self, column: usize, tie_break: RatioTieBreak) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen index, minimum ratio, corresponding leaving_column (for Bland's algorithm))
        let mut min_values: Option<(usize, Rational, usize)> = None;
        for (row, xij) in self.column(column).enumerate() {
            if xij.is_positive() {
                let ratio = self.constraint_value(row) / xij;
                let leaving_column = self.basis_indices[row];
                if let Some((min_index, min_ratio, min_leaving_column)) = &mut min_values {
                    if &ratio < min_ratio {
                        *min_index = row;
                        *min_ratio = ratio;
                        *min_leaving_column = leaving_column;
                    } else if &ratio == min_ratio
                        && tie_break == RatioTieBreak::LowestBasicColumn
                        && leaving_column < *min_leaving_column
                    {
                        *min_index = row;
                        *min_leaving_column = leaving_column;
                    }
                } else {
                    min_values = Some((row, ratio, leaving_column));
                }
            }
        }

        min_values.map(|(min_index, _, _)| min_index)
    }

    /// Replace the objective row, and make it consistent with the current basis again.
    ///
    /// # Arguments
    ///
    /// * `cost`: Cost of every column in the problem to maximize.
    pub(crate) fn set_cost_row(&mut self, cost: &[Rational]) {
        debug_assert_eq!(cost.len(), self.nr_columns());

        let objective_row = self.nr_rows();
        for (j, value) in cost.iter().enumerate() {
            self.matrix.set(objective_row, j, -value);
        }
        self.matrix.set(objective_row, self.nr_columns(), Rational::zero());

        self.canonicalize_cost_row();
    }

    /// Replace the objective row by the cost of the second phase.
    pub(crate) fn restore_cost_row(&mut self) {
        let cost = mem::take(&mut self.cost);
        self.set_cost_row(&cost);
        self.cost = cost;
    }

    /// Eliminate the relative cost of all basic columns from the objective row.
    fn canonicalize_cost_row(&mut self) {
        let objective_row = self.nr_rows();
        for i in 0..self.nr_rows() {
            let factor = self.relative_cost(self.basis_indices[i]).clone();
            if !factor.is_zero() {
                self.matrix.subtract_multiple_of_row(i, objective_row, &factor);
            }
        }
    }

    /// Cost of every column in the maximization problem of the second phase.
    pub fn cost(&self) -> &[Rational] {
        &self.cost
    }

    /// Remove columns that are not in the basis.
    ///
    /// The remaining columns keep their relative order; basis indices are updated accordingly.
    ///
    /// # Arguments
    ///
    /// * `columns`: Sorted, deduplicated indices of non-basic columns.
    pub(crate) fn remove_columns(&mut self, columns: &[usize]) {
        debug_assert!(columns.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns() && !self.is_in_basis(j)));

        if columns.is_empty() {
            return;
        }

        let mut removed = columns.iter().peekable();
        let keep = (0..=self.nr_columns())
            .filter(|j| {
                if removed.peek() == Some(&j) {
                    removed.next();
                    false
                } else {
                    true
                }
            })
            .collect::<Vec<_>>();
        self.matrix.retain_columns(&keep);

        remove_indices(&mut self.columns, columns);
        remove_indices(&mut self.cost, columns);

        for index in &mut self.basis_indices {
            let shift = columns.iter().take_while(|&&j| j < *index).count();
            *index -= shift;
        }
        self.basis_columns = self.basis_indices.iter().copied().collect();
    }

    /// Remove a constraint row together with its basic column's membership of the basis.
    ///
    /// Only meant for rows that are linearly dependent on the others: the column that is basic in
    /// this row is not in the basis anymore afterwards.
    pub(crate) fn remove_row(&mut self, row: usize) {
        debug_assert!(row < self.nr_rows());
        debug_assert!(self.constraint_value(row).is_zero());

        self.matrix.remove_row(row);
        let column = self.basis_indices.remove(row);
        self.basis_columns.remove(&column);
    }

    /// Relative cost of a column: its entry in the objective row.
    ///
    /// A negative relative cost means that bringing the column into the basis increases the
    /// objective function. It is zero for all basic columns.
    pub fn relative_cost(&self, j: usize) -> &Rational {
        debug_assert!(j < self.nr_columns());

        self.matrix.get(self.nr_rows(), j)
    }

    /// Single element with respect to the current basis.
    pub fn element(&self, i: usize, j: usize) -> &Rational {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.matrix.get(i, j)
    }

    /// Column with respect to the current basis, excluding the objective row.
    pub fn column(&self, j: usize) -> impl Iterator<Item = &Rational> + '_ {
        debug_assert!(j < self.nr_columns());

        self.matrix.column(j).take(self.nr_rows())
    }

    /// Squared Euclidean norm of a column over the constraint rows.
    pub fn column_squared_norm(&self, j: usize) -> Rational {
        debug_assert!(j < self.nr_columns());

        self.matrix.column_squared_norm(j, self.nr_rows())
    }

    /// Value of the basic variable in a row.
    pub fn constraint_value(&self, i: usize) -> &Rational {
        debug_assert!(i < self.nr_rows());

        self.matrix.get(i, self.nr_columns())
    }

    /// Get the value of the objective function that is currently maximized.
    ///
    /// # Note
    ///
    /// This function works for both the artificial and the actual cost. During the first phase, it
    /// is minus the sum of the artificial variables.
    pub fn objective_function_value(&self) -> &Rational {
        self.matrix.get(self.nr_rows(), self.nr_columns())
    }

    /// Whether a column is in the basis.
    ///
    /// # Return value
    ///
    /// `bool` with value true if the column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Column indices of the basic variables, by row.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Index of the column that is basic in a row.
    pub fn basis_column_index_for_row(&self, i: usize) -> usize {
        self.basis_indices[i]
    }

    /// Names of the basic variables, by row.
    pub fn basis_names(&self) -> Vec<&str> {
        self.basis_indices.iter().map(|&j| self.name(j)).collect()
    }

    /// Name of the variable in a column.
    pub fn name(&self, j: usize) -> &str {
        &self.columns[j].name
    }

    /// Type of the variable in a column.
    pub fn kind(&self, j: usize) -> ColumnKind {
        self.columns[j].kind
    }

    /// Whether a column is an artificial variable.
    pub fn is_artificial(&self, j: usize) -> bool {
        self.columns[j].is_artificial()
    }

    /// Number of artificial variables in the tableau.
    pub fn nr_artificial_variables(&self) -> usize {
        self.columns.iter().filter(|column| column.is_artificial()).count()
    }

    /// Whether there is an artificial variable in the basis.
    pub fn has_artificial_in_basis(&self) -> bool {
        self.basis_indices.iter().any(|&j| self.is_artificial(j))
    }

    /// All non-basic columns with a negative relative cost, by increasing column index.
    ///
    /// These are the columns that improve the objective function when brought into the basis.
    pub fn profitable_columns(&self) -> impl Iterator<Item = (usize, &Rational)> + '_ {
        (0..self.nr_columns())
            .filter(move |&j| !self.is_in_basis(j))
            .map(move |j| (j, self.relative_cost(j)))
            .filter(|(_, cost)| cost.is_negative())
    }

    /// Number of constraint rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.basis_indices.len()
    }

    /// Number of variables in the tableau.
    pub fn nr_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the tableau currently has a valid basic feasible solution.
    ///
    /// Only used for debug purposes.
    pub(crate) fn is_in_basic_feasible_solution_state(&self) -> bool {
        // Correct number of basis columns (uniqueness is implied because it's a set)
        let basis_size = self.basis_columns.len() == self.nr_rows()
            && self.basis_indices.iter().all(|j| self.basis_columns.contains(j));

        // Basic columns are unit vectors with zero relative cost
        let unit_columns = self.basis_indices.iter().enumerate().all(|(i, &j)| {
            self.relative_cost(j).is_zero()
                && self.column(j).enumerate()
                    .all(|(k, value)| if k == i { value.is_one() } else { value.is_zero() })
        });

        // `b` >= 0
        let nonnegative = (0..self.nr_rows()).all(|i| !self.constraint_value(i).is_negative());

        basis_size && unit_columns && nonnegative
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        let objective = self.objective_function_value().to_string();
        let cost = (0..self.nr_columns())
            .map(|j| self.relative_cost(j).to_string())
            .collect::<Vec<_>>();
        let b = (0..self.nr_rows())
            .map(|i| self.constraint_value(i).to_string())
            .collect::<Vec<_>>();
        let columns = (0..self.nr_columns())
            .map(|j| self.column(j).map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let row_counter_width = max("cost".len(), self.nr_rows().to_string().len());
        let column_width = columns.iter().enumerate().map(|(j, column)| {
            column.iter().map(String::len)
                .chain([self.name(j).len(), cost[j].len()])
                .max()
                .unwrap_or(0)
        }).collect::<Vec<_>>();

        let b_inner_width = b.iter().map(String::len).chain([objective.len()]).max().unwrap_or(0);

        // Column names
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        write!(f, " {0:^width$} |", "b", width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", self.name(j), width = width)?;
        }
        writeln!(f)?;

        let total_width = (row_counter_width + 1) + 1 + (1 + b_inner_width + 1) + 1
            + column_width.iter().map(|l| 1 + l).sum::<usize>();
        // Separator
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Cost row
        write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
        write!(f, " {0:^width$} |", objective, width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", cost[j], width = width)?;
        }
        writeln!(f)?;

        // Separator
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Row counter and row data
        for i in 0..self.nr_rows() {
            write!(f, "{0:>width$} |", i, width = row_counter_width)?;
            write!(f, " {0:^width$} |", b[i], width = b_inner_width)?;
            for (j, width) in column_width.iter().enumerate() {
                write!(f, " {0:^width$}", columns[j][i], width = width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        let basis = self.basis_indices.iter().enumerate()
            .map(|(i, &j)| (i, self.name(j)))
            .collect::<Vec<_>>();
        writeln!(f, "{:?}", basis)
    }
}
