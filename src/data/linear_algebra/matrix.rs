//! # Matrix implementations
//!
//! A dense matrix stored in a single row-major buffer. Rows are contiguous slices, which is what
//! the Gauss-Jordan operations of the tableau work on; columns are read through iterators.
use crate::data::number_types::traits::Field;

/// Row-major dense matrix. Dimensions only change by explicitly removing rows or columns.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a matrix from its rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Rows of the matrix, all of length `nr_columns`.
    /// * `nr_columns`: Number of columns, needed to represent matrices without rows.
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        let nr_rows = rows.len();
        let data = rows.into_iter().flatten().collect::<Vec<_>>();

        Self { data, nr_rows, nr_columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i * self.nr_columns + j]
    }

    /// Mutable access to the value at coordinate (`i`, `j`).
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &mut self.data[i * self.nr_columns + j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set(&mut self, i: usize, j: usize, value: F) {
        *self.get_mut(i, j) = value;
    }

    /// All values in row `i`, mutably.
    pub fn row_mut(&mut self, i: usize) -> &mut [F] {
        debug_assert!(i < self.nr_rows);

        &mut self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// All values in column `j`, from the top row down.
    pub fn column(&self, j: usize) -> impl Iterator<Item = &F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().skip(j).step_by(self.nr_columns).take(self.nr_rows)
    }

    /// Remove row `i`, shifting all rows below it up by one.
    pub fn remove_row(&mut self, i: usize) {
        debug_assert!(i < self.nr_rows);

        self.data.drain(i * self.nr_columns..(i + 1) * self.nr_columns);
        self.nr_rows -= 1;
    }

    /// Keep only the columns whose index is yielded by `keep`, in that order.
    ///
    /// # Arguments
    ///
    /// * `keep`: Sorted, deduplicated column indices to retain.
    pub fn retain_columns(&mut self, keep: &[usize]) {
        debug_assert!(keep.is_sorted());
        debug_assert!(keep.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(keep.iter().all(|&j| j < self.nr_columns));

        let nr_columns = self.nr_columns;
        let mut position = 0;
        let mut kept = 0;
        self.data.retain(|_| {
            let j = position % nr_columns;
            position += 1;
            let retain = kept < keep.len() && keep[kept] == j;
            if retain {
                kept += 1;
            }
            if j == nr_columns - 1 {
                kept = 0;
            }
            retain
        });
        self.nr_columns = keep.len();
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F: Field> DenseMatrix<F> {
    /// Create a matrix of zero's of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        Self {
            data: vec![F::zero(); nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    /// Multiply all values in row `i` with `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: &F) {
        for value in self.row_mut(i) {
            *value *= factor;
        }
    }

    /// Divide all values in row `i` by `divisor`.
    ///
    /// # Panics
    ///
    /// When `divisor` is zero.
    pub fn divide_row(&mut self, i: usize, divisor: &F) {
        assert!(!divisor.is_zero(), "Division of row {} by zero", i);

        for value in self.row_mut(i) {
            *value /= divisor;
        }
    }

    /// Subtract `factor` times row `read_row` from row `write_row`.
    pub fn subtract_multiple_of_row(&mut self, read_row: usize, write_row: usize, factor: &F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        let nr_columns = self.nr_columns;
        let (read, write) = if read_row < write_row {
            let (head, tail) = self.data.split_at_mut(write_row * nr_columns);
            (&head[read_row * nr_columns..(read_row + 1) * nr_columns], &mut tail[..nr_columns])
        } else {
            let (head, tail) = self.data.split_at_mut(read_row * nr_columns);
            (&tail[..nr_columns], &mut head[write_row * nr_columns..(write_row + 1) * nr_columns])
        };

        for (target, source) in write.iter_mut().zip(read) {
            if !source.is_zero() {
                let mut difference = factor.clone();
                difference *= source;
                *target -= &difference;
            }
        }
    }

    /// Sum of the squares of the values in column `j`, over the rows `0` until `nr_rows`.
    pub fn column_squared_norm(&self, j: usize, nr_rows: usize) -> F {
        debug_assert!(nr_rows <= self.nr_rows);

        self.column(j)
            .take(nr_rows)
            .filter(|value| !value.is_zero())
            .fold(F::zero(), |mut total, value| {
                let mut square = value.clone();
                square *= value;
                total += &square;
                total
            })
    }
}
