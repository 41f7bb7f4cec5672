//! # Errors in the description of a linear program
//!
//! These errors are returned while a linear program is being put together. They describe a model
//! that is inconsistent, not one that is infeasible or unbounded: those are solve outcomes.
use std::fmt::{Display, Formatter, Result as FormatResult};

use thiserror::Error;

/// Where in the linear program a variable was referenced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Location {
    /// The objective function.
    Objective,
    /// The constraint with this index, in order of insertion.
    Constraint(usize),
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        match self {
            Location::Objective => f.write_str("objective function"),
            Location::Constraint(index) => write!(f, "constraint {}", index),
        }
    }
}

/// An `InconsistencyError` is returned when a linear program can't be represented as described.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InconsistencyError {
    /// Variables need a non-empty name.
    #[error("variable names can not be empty")]
    EmptyName,
    /// A variable with this name was already declared.
    #[error("variable \"{0}\" is declared more than once")]
    DuplicateVariable(String),
    /// A coefficient refers to a variable that was never declared.
    #[error("variable \"{name}\" is used in the {location} but was never declared")]
    UnknownVariable {
        /// Name of the variable.
        name: String,
        /// Where the variable was referenced.
        location: Location,
    },
    /// The same variable received two coefficients in one row.
    #[error("variable \"{name}\" has more than one coefficient in the {location}")]
    DuplicateCoefficient {
        /// Name of the variable.
        name: String,
        /// Row the coefficients were given for.
        location: Location,
    },
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::error::{InconsistencyError, Location};

    #[test]
    fn messages() {
        let error = InconsistencyError::UnknownVariable {
            name: "y".to_string(),
            location: Location::Constraint(2),
        };
        assert_eq!(error.to_string(), "variable \"y\" is used in the constraint 2 but was never declared");

        let error = InconsistencyError::DuplicateCoefficient {
            name: "x1".to_string(),
            location: Location::Objective,
        };
        assert_eq!(error.to_string(), "variable \"x1\" has more than one coefficient in the objective function");
    }
}
