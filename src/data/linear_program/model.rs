//! # Linear programs in inequality form
//!
//! The input of the solver: maximize or minimize `c^T x` subject to `Ax <= b` and `x >= 0`. Rows of
//! other types (equalities, `>=` rows) are expected to have been rewritten into `<=` rows by the
//! caller, for example by multiplying a `>=` row by `-1`.
//!
//! A `LinearProgram` is built up incrementally and validated on every change. Once handed to the
//! solver it is only read.
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;
use num_traits::{Signed, Zero};

use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::error::{InconsistencyError, Location};
use crate::data::linear_program::variable::compare_names;
use crate::data::number_types::rational::Rational;

/// A single `<=` constraint.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint {
    /// Coefficient per variable name. Variables that don't appear have coefficient zero.
    coefficients: BTreeMap<String, Rational>,
    /// Right-hand side.
    rhs: Rational,
}

impl Constraint {
    /// Coefficients of this row, keyed by variable name.
    pub fn coefficients(&self) -> &BTreeMap<String, Rational> {
        &self.coefficients
    }

    /// Coefficient of a single variable, if it appears in this row.
    pub fn coefficient(&self, name: &str) -> Option<&Rational> {
        self.coefficients.get(name)
    }

    /// The right-hand side `b_i`.
    pub fn rhs(&self) -> &Rational {
        &self.rhs
    }

    /// Value of the left-hand side at a point.
    fn evaluate(&self, point: &HashMap<&str, &Rational>) -> Rational {
        evaluate(&self.coefficients, point)
    }
}

/// A linear program with only `<=` constraints and nonnegative variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearProgram {
    /// Direction of optimization.
    objective: Objective,
    /// Names of all declared variables.
    variables: BTreeSet<String>,
    /// Objective function coefficient per variable name.
    cost: BTreeMap<String, Rational>,
    /// All constraints, in insertion order.
    constraints: Vec<Constraint>,
}

impl LinearProgram {
    /// Create an empty linear program.
    pub fn new(objective: Objective) -> Self {
        Self {
            objective,
            variables: BTreeSet::new(),
            cost: BTreeMap::new(),
            constraints: Vec::new(),
        }
    }

    /// Declare a variable.
    ///
    /// # Errors
    ///
    /// If the name is empty or was declared before.
    pub fn add_variable(&mut self, name: impl Into<String>) -> Result<(), InconsistencyError> {
        let name = name.into();
        if name.is_empty() {
            return Err(InconsistencyError::EmptyName);
        }
        if self.variables.contains(&name) {
            return Err(InconsistencyError::DuplicateVariable(name));
        }

        self.variables.insert(name);
        Ok(())
    }

    /// Declare several variables at once.
    ///
    /// # Errors
    ///
    /// See `add_variable`.
    pub fn add_variables<S: Into<String>>(
        &mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Result<(), InconsistencyError> {
        names.into_iter().try_for_each(|name| self.add_variable(name))
    }

    /// Set the objective function, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// If a variable is not declared, or receives more than one coefficient.
    pub fn set_cost<S: Into<String>>(
        &mut self,
        coefficients: impl IntoIterator<Item = (S, Rational)>,
    ) -> Result<(), InconsistencyError> {
        self.cost = self.collect_row(coefficients, Location::Objective)?;
        Ok(())
    }

    /// Add a constraint `sum_j a_j x_j <= rhs`.
    ///
    /// # Return value
    ///
    /// Index of the new constraint.
    ///
    /// # Errors
    ///
    /// If a variable is not declared, or receives more than one coefficient.
    pub fn add_constraint<S: Into<String>>(
        &mut self,
        coefficients: impl IntoIterator<Item = (S, Rational)>,
        rhs: Rational,
    ) -> Result<usize, InconsistencyError> {
        let index = self.constraints.len();
        let coefficients = self.collect_row(coefficients, Location::Constraint(index))?;
        self.constraints.push(Constraint { coefficients, rhs });

        Ok(index)
    }

    fn collect_row<S: Into<String>>(
        &self,
        coefficients: impl IntoIterator<Item = (S, Rational)>,
        location: Location,
    ) -> Result<BTreeMap<String, Rational>, InconsistencyError> {
        let mut row = BTreeMap::new();
        for (name, value) in coefficients {
            let name = name.into();
            if !self.variables.contains(&name) {
                return Err(InconsistencyError::UnknownVariable { name, location });
            }
            if row.contains_key(&name) {
                return Err(InconsistencyError::DuplicateCoefficient { name, location });
            }
            row.insert(name, value);
        }

        Ok(row)
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Names of all declared variables, in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(String::as_str)
    }

    /// Objective function coefficient of a variable; zero if it was not given.
    pub fn cost(&self, name: &str) -> Rational {
        self.cost.get(name).cloned().unwrap_or_else(Rational::zero)
    }

    /// All constraints, in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of declared variables.
    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Whether the origin satisfies all constraints, that is, whether all `b_i >= 0`.
    ///
    /// If so, the slack variables form a feasible basis and no first phase is needed.
    pub fn origin_is_feasible(&self) -> bool {
        self.constraints.iter().all(|constraint| !constraint.rhs.is_negative())
    }

    /// Value of the objective function at a point.
    ///
    /// # Arguments
    ///
    /// * `point`: (variable name, value) pairs. Variables that are missing have value zero.
    pub fn objective_value_at(&self, point: &[(String, Rational)]) -> Rational {
        evaluate(&self.cost, &index(point))
    }

    /// Whether a point satisfies all constraints and nonnegativity bounds.
    ///
    /// # Arguments
    ///
    /// * `point`: (variable name, value) pairs. Variables that are missing have value zero.
    pub fn is_feasible(&self, point: &[(String, Rational)]) -> bool {
        let point = index(point);

        point.values().all(|value| !value.is_negative())
            && self.constraints.iter().all(|constraint| &constraint.evaluate(&point) <= constraint.rhs())
    }
}

fn index(point: &[(String, Rational)]) -> HashMap<&str, &Rational> {
    point.iter().map(|(name, value)| (name.as_str(), value)).collect()
}

fn evaluate(coefficients: &BTreeMap<String, Rational>, point: &HashMap<&str, &Rational>) -> Rational {
    coefficients.iter()
        .filter_map(|(name, coefficient)| point.get(name.as_str()).map(|&value| coefficient * value))
        .fold(Rational::zero(), |total, term| total + term)
}

fn write_row(f: &mut Formatter, coefficients: &BTreeMap<String, Rational>) -> FormatResult {
    if coefficients.is_empty() {
        return f.write_str("0");
    }

    let terms = coefficients.iter()
        .sorted_by(|(left, _), (right, _)| compare_names(left, right))
        .map(|(name, coefficient)| format!("{} {}", coefficient, name))
        .join(" + ");
    f.write_str(&terms)
}

impl Display for LinearProgram {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        write!(f, "{} ", self.objective)?;
        write_row(f, &self.cost)?;
        writeln!(f)?;
        writeln!(f, "Subject To")?;
        for constraint in &self.constraints {
            f.write_str("    ")?;
            write_row(f, &constraint.coefficients)?;
            writeln!(f, " <= {}", constraint.rhs)?;
        }
        Ok(())
    }
}
