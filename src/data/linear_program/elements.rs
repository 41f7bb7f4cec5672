//! # Building blocks to describe linear programs.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Neg;

use num_traits::One;

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    /// Factor to multiply the cost vector with to express the problem as a maximization.
    ///
    /// The tableau always maximizes. Minimizing `c^T x` is the same as maximizing `-c^T x`, with the
    /// sign of the optimal value flipped.
    #[must_use]
    pub fn into<F: One + Neg<Output = F>>(self) -> F {
        match self {
            Objective::Maximize => F::one(),
            Objective::Minimize => -F::one(),
        }
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        f.write_str(match self {
            Objective::Maximize => "Maximize",
            Objective::Minimize => "Minimize",
        })
    }
}
